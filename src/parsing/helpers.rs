//! Primitive nom parsers shared by the timetable and coordinate grammars.
use nom::{
    IResult, Parser,
    bytes::complete::take_till1,
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{all_consuming, map_opt, opt},
    multi::separated_list1,
    sequence::{delimited, separated_pair},
};

/// One axis of a coordinate: an optional `N` (negative) followed by the absolute value.
pub(crate) fn signed_axis_parser(input: &str) -> IResult<&str, i32> {
    map_opt(
        (opt(char('N')), digit1),
        |(sign, digits): (Option<char>, &str)| {
            let value = digits.parse::<i64>().ok()?;
            i32::try_from(if sign.is_some() { -value } else { value }).ok()
        },
    )
    .parse(input)
}

/// `N3-5`, `12-N7`, `0-0`, ...
pub(crate) fn coordinate_parser(input: &str) -> IResult<&str, (i32, i32)> {
    all_consuming(separated_pair(
        signed_axis_parser,
        char('-'),
        signed_axis_parser,
    ))
    .parse(input)
}

/// Whitespace separated fields of a timetable line. Leading and trailing blanks are ignored,
/// an empty line fails.
pub(crate) fn fields_parser(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(delimited(
        multispace0,
        separated_list1(multispace1, take_till1(|c: char| c.is_whitespace())),
        multispace0,
    ))
    .parse(input)
}
