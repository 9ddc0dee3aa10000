#![doc = include_str!("../README.md")]
mod error;
mod models;
mod parsing;
mod rly;
mod utils;

pub use error::{RResult, RailosError};
pub use models::*;
pub use parsing::error::{PResult, ParsingError};
pub use parsing::{
    ABSENT_VALUE, COMPONENT_SEPARATOR, END_OF_TABLE_SENTINEL, FIELD_SEPARATOR,
    INACTIVE_ELEMENTS_SENTINEL, join, parse_action, parse_cdt, parse_fsp, parse_jbo,
    parse_layout_dump, parse_location, parse_pas, parse_rsp, parse_start_type, split,
};
pub use rly::RlyParser;
pub use utils::{TIME_FORMAT, format_time, parse_time};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn coordinate_roundtrip(x in any::<i32>(), y in any::<i32>()) {
            let coordinate = Coordinate::new(x, y);
            prop_assert_eq!(coordinate, coordinate.to_string().parse::<Coordinate>().unwrap());
        }

        #[test]
        fn coordinate_text_has_a_single_separator(x in any::<i32>(), y in any::<i32>()) {
            let text = Coordinate::new(x, y).to_string();
            prop_assert_eq!(1, text.matches('-').count());
        }

        #[test]
        fn calling_point_roundtrip(hour in 0u32..24, minute in 0u32..60, name in "[A-Z][a-z]{2,10}[0-9]?") {
            prop_assume!(!["pas", "jbo", "fsp", "rsp", "cdt"].iter().any(|k| name.contains(*k)));
            let line = format!("{hour:02}:{minute:02} {name}");
            prop_assert_eq!(&line, &parse_action(&line).unwrap().to_string());
        }
    }

    #[test]
    fn public_api_decodes_both_formats() {
        let action = parse_action("10:15 jbo 2B14").unwrap();
        assert_eq!(Some(ActionKeyword::Jbo), action.keyword());

        let start = parse_start_type("08:00 Snt 1-2 3-4 S").unwrap();
        assert_eq!(StartTypeKind::Snt, start.kind());

        let dump = [
            "RailOS v2.15.0",
            "\n0\n0\n0\n0",
            "\n0\nInactive elements",
            "\n****",
        ]
        .join(&COMPONENT_SEPARATOR.to_string());
        let layout = parse_layout_dump(&dump).unwrap();
        assert!(layout.active_elements().is_empty());
        assert!(layout.inactive_elements().is_empty());
    }
}
