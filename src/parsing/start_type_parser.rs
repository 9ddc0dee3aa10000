//! # Start type parsing
//!
//! The first statement of a service says how it enters the simulation. The tag is the second
//! field:
//!
//! `
//! 08:00 Snt 1-2 3-4       % new train on the layout, rear element 1-2, front element 3-4
//! 08:00 Snt 1-2 3-4 S     % same, under signaller control
//! 08:00 Sfs 2B14          % split from 2B14
//! 08:00 Sns-fsh 1S01      % new service from shuttle 1S01
//! 08:00 Snt-sh 1-2 3-4 1S01
//! 08:00 Sns-sh 1S01 2F02  % shuttle 1S01 started from feeder 2F02
//! `
use std::str::FromStr;

use crate::{
    models::{Coordinate, Reference, Sfs, SnsFsh, SnsSh, Snt, SntSh, StartType, StartTypeKind},
    parsing::{
        action_parser::expect_field_count,
        error::{PResult, ParsingError},
        ttb_line::{join, split},
    },
    utils::parse_time,
};

const SIGNALLER_CONTROL_FLAG: &str = "S";

pub fn parse_start_type(line: &str) -> PResult<StartType> {
    let fields = split(line)?;
    let tag = fields
        .get(1)
        .ok_or_else(|| ParsingError::grammar("start statement", "a start type tag", line))?;
    let kind = StartTypeKind::from_str(tag).map_err(|_| {
        ParsingError::grammar(
            "start statement",
            "one of Snt, Sfs, Sns-fsh, Snt-sh, Sns-sh",
            line,
        )
    })?;
    let statement = format!("'{kind}' start");
    let time = parse_time(&format!("start time in {statement}"), fields[0])?;

    let start_type = match kind {
        StartTypeKind::Snt => {
            expect_field_count(&statement, &fields, &[4, 5])?;
            let under_signaller_control = match fields.get(4) {
                Some(&SIGNALLER_CONTROL_FLAG) => true,
                Some(_) => {
                    return Err(ParsingError::grammar(
                        &statement,
                        "a final 'S' signaller control flag",
                        &join(&fields),
                    ));
                }
                None => false,
            };
            StartType::Snt(Snt::new(
                time,
                Coordinate::from_str(fields[2])?,
                Coordinate::from_str(fields[3])?,
                under_signaller_control,
            ))
        }
        StartTypeKind::Sfs => {
            expect_field_count(&statement, &fields, &[3])?;
            StartType::Sfs(Sfs::new(time, Reference::from_str(fields[2])?))
        }
        StartTypeKind::SnsFsh => {
            expect_field_count(&statement, &fields, &[3])?;
            StartType::SnsFsh(SnsFsh::new(time, Reference::from_str(fields[2])?))
        }
        StartTypeKind::SntSh => {
            expect_field_count(&statement, &fields, &[5])?;
            StartType::SntSh(SntSh::new(
                time,
                Coordinate::from_str(fields[2])?,
                Coordinate::from_str(fields[3])?,
                Reference::from_str(fields[4])?,
            ))
        }
        StartTypeKind::SnsSh => {
            expect_field_count(&statement, &fields, &[4])?;
            let linked_shuttle_ref = Reference::from_str(fields[2])?;
            let feeder_ref = Reference::from_str(fields[3])?;
            StartType::SnsSh(SnsSh::new(time, feeder_ref, linked_shuttle_ref))
        }
    };
    Ok(start_type)
}
