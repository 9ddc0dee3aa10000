// ------------------------------------------------------------------------------------------------
// --- Time fields
// ------------------------------------------------------------------------------------------------

use chrono::NaiveTime;

use crate::parsing::error::{PResult, ParsingError};

/// Every time field in a timetable statement is written as `HH:MM`.
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses an `HH:MM` field. `field` names the field for the error message.
pub fn parse_time(field: &str, value: &str) -> PResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|source| ParsingError::TimeFormat {
        field: field.to_string(),
        value: value.to_string(),
        source,
    })
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

// ------------------------------------------------------------------------------------------------
// --- Serde adapters
// ------------------------------------------------------------------------------------------------

pub(crate) mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::{TIME_FORMAT, format_time};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let value = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&value, TIME_FORMAT).map_err(D::Error::custom)
    }
}

pub(crate) mod option_hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::{TIME_FORMAT, format_time};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.serialize_some(&format_time(*time)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|value| NaiveTime::parse_from_str(&value, TIME_FORMAT).map_err(D::Error::custom))
            .transpose()
    }
}
