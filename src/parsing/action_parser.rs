//! # Action parsing
//!
//! A timetable statement is one timed event of a service. The statement keyword, when there is
//! one, is the second field:
//!
//! `
//! 10:15 10:20 Platform1   % calling point with a dwell
//! 10:15 Platform1         % calling point, no departure time
//! 10:15 pas Junction      % passing point
//! 10:15 jbo 2B14          % 2B14 joins this service
//! 10:15 fsp 2B15          % the service becomes 2B15
//! 10:15 rsp 2B16          % the service is replaced by 2B16
//! 10:15 cdt               % change of direction
//! `
//!
//! Routing is done on whether a keyword occurs anywhere in the raw line, checked in the
//! order `pas`, `jbo`, `fsp`, `rsp`, `cdt`. A line matching none of them is a calling point.
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::{
    models::{Action, ActionKeyword, Cdt, Fsp, Jbo, Location, Pas, Reference, Rsp},
    parsing::{
        error::{PResult, ParsingError},
        ttb_line::{join, split},
    },
    utils::parse_time,
};

/// Parses one timetable statement.
pub fn parse_action(line: &str) -> PResult<Action> {
    let fields = split(line)?;

    for keyword in ActionKeyword::iter() {
        if line.contains(&keyword.to_string().replace('-', "_")) {
            log::debug!("Routing '{line}' to the '{keyword}' parser");
            return match keyword {
                ActionKeyword::Pas => parse_pas(&fields).map(Action::Pas),
                ActionKeyword::Jbo => parse_jbo(&fields).map(Action::Jbo),
                ActionKeyword::Fsp => parse_fsp(&fields).map(Action::Fsp),
                ActionKeyword::Rsp => parse_rsp(&fields).map(Action::Rsp),
                ActionKeyword::Cdt => parse_cdt(&fields).map(Action::Cdt),
            };
        }
    }
    parse_location(&fields).map(Action::Location)
}

// ------------------------------------------------------------------------------------------------
// --- Statement parsers
// ------------------------------------------------------------------------------------------------

pub fn parse_location(fields: &[&str]) -> PResult<Location> {
    expect_field_count("location", fields, &[2, 3])?;
    let arrival = parse_time("arrival time in location", fields[0])?;

    let (departure, name) = if fields.len() == 3 {
        let departure = parse_time("departure time in location", fields[1])?;
        (Some(departure), fields[2])
    } else {
        (None, fields[1])
    };

    Ok(Location::new(arrival, departure, name.to_string()))
}

pub fn parse_pas(fields: &[&str]) -> PResult<Pas> {
    expect_field_count("'pas' statement", fields, &[3])?;
    let time = parse_time("time in 'pas' statement", fields[0])?;
    Ok(Pas::new(time, fields[2].to_string()))
}

pub fn parse_jbo(fields: &[&str]) -> PResult<Jbo> {
    expect_field_count("'jbo' statement", fields, &[3])?;
    let time = parse_time("time in 'jbo' statement", fields[0])?;
    let joining_service = Reference::from_str(fields[2])?;
    Ok(Jbo::new(time, joining_service))
}

pub fn parse_fsp(fields: &[&str]) -> PResult<Fsp> {
    expect_field_count("'fsp' statement", fields, &[3])?;
    let time = parse_time("time in 'fsp' statement", fields[0])?;
    let new_service = Reference::from_str(fields[2])?;
    Ok(Fsp::new(time, new_service))
}

pub fn parse_rsp(fields: &[&str]) -> PResult<Rsp> {
    expect_field_count("'rsp' statement", fields, &[3])?;
    let time = parse_time("time in 'rsp' statement", fields[0])?;
    let replacement_service = Reference::from_str(fields[2])?;
    Ok(Rsp::new(time, replacement_service))
}

pub fn parse_cdt(fields: &[&str]) -> PResult<Cdt> {
    expect_field_count("'cdt' statement", fields, &[2])?;
    let time = parse_time("time in 'cdt' statement", fields[0])?;
    Ok(Cdt::new(time))
}

// ------------------------------------------------------------------------------------------------
// --- Helper Functions
// ------------------------------------------------------------------------------------------------

pub(crate) fn expect_field_count(
    statement: &str,
    fields: &[&str],
    allowed: &[usize],
) -> PResult<()> {
    if allowed.contains(&fields.len()) {
        return Ok(());
    }
    let expected = allowed
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" or ");
    Err(ParsingError::grammar(
        statement,
        format!("{expected} items"),
        &join(fields),
    ))
}
