// Timetable statements are written as whitespace separated fields on a single line:
//
// `10:15 10:20 Platform1`
// `10:15 jbo 2B14`
// `08:00 Snt 1-2 3-4 S`
//
// There is no quoting, a field never contains a blank.
use crate::parsing::{
    error::{PResult, ParsingError},
    helpers::fields_parser,
};

/// Breaks a timetable line into its fields.
pub fn split(line: &str) -> PResult<Vec<&str>> {
    let (_, fields) = fields_parser(line)
        .map_err(|_| ParsingError::grammar("timetable line", "at least one field", line))?;
    Ok(fields)
}

/// Writes fields back as a line, separated by a single space.
pub fn join<I, T>(fields: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut line = String::new();
    for (index, field) in fields.into_iter().enumerate() {
        if index > 0 {
            line.push(' ');
        }
        line.push_str(field.as_ref());
    }
    line
}
