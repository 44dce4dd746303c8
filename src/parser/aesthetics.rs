// Aesthetics parser for the chart pipeline DSL

use super::ast::{Aesthetics, FieldRef};
use super::lexer::{label, ws};
use crate::encoding::FieldType;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{map, opt, value},
    error::{Error, ErrorKind},
    multi::separated_list0,
    sequence::preceded,
    IResult,
};

/// Parse a field type suffix: `:Q`, `:N`, `:O` or `:T`
fn field_type(input: &str) -> IResult<&str, FieldType> {
    preceded(
        char(':'),
        alt((
            value(FieldType::Quantitative, char('Q')),
            value(FieldType::Nominal, char('N')),
            value(FieldType::Ordinal, char('O')),
            value(FieldType::Temporal, char('T')),
        )),
    )(input)
}

/// Parse a column reference with optional type suffix
/// Format: Frequency, Frequency:Q, "Sound Power":Q
pub fn parse_field_ref(input: &str) -> IResult<&str, FieldRef> {
    let (input, field) = label(input)?;
    let (input, field_type) = opt(field_type)(input)?;
    Ok((input, FieldRef { field, field_type }))
}

/// Parse aesthetics specification
/// Format: aes(x: col, y: col) or aes(x: col, y: col, color: col); named
/// arguments may come in any order, x and y are required
pub fn parse_aesthetics(input: &str) -> IResult<&str, Aesthetics> {
    let start = input;
    let (input, _) = ws(tag("aes"))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, args) = separated_list0(
        ws(char(',')),
        alt((
            map(preceded(ws(tag("x:")), ws(parse_field_ref)), |f| ("x", f)),
            map(preceded(ws(tag("y:")), ws(parse_field_ref)), |f| ("y", f)),
            map(preceded(ws(tag("color:")), ws(parse_field_ref)), |f| ("color", f)),
        )),
    )(input)?;

    let (input, _) = ws(char(')'))(input)?;

    let mut x = None;
    let mut y = None;
    let mut color = None;
    for (key, field) in args {
        match key {
            "x" => x = Some(field),
            "y" => y = Some(field),
            "color" => color = Some(field),
            _ => {}
        }
    }

    match (x, y) {
        (Some(x), Some(y)) => Ok((input, Aesthetics { x, y, color })),
        _ => Err(nom::Err::Error(Error::new(start, ErrorKind::Verify))),
    }
}
