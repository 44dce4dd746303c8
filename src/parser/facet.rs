// Facet parser for the chart pipeline DSL

use super::aesthetics::parse_field_ref;
use super::ast::{Facet, FieldRef};
use super::lexer::ws;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, u32 as uint},
    combinator::map,
    error::{Error, ErrorKind},
    multi::separated_list0,
    sequence::preceded,
    IResult,
};

enum FacetArg {
    By(FieldRef),
    Ncol(u32),
}

/// Parse a facet_wrap command
/// Format: facet_wrap(by: col) or facet_wrap(by: col:N, ncol: 2)
pub fn parse_facet_wrap(input: &str) -> IResult<&str, Facet> {
    let start = input;
    let (input, _) = ws(tag("facet_wrap"))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, args) = separated_list0(
        ws(char(',')),
        alt((
            map(preceded(ws(tag("by:")), ws(parse_field_ref)), FacetArg::By),
            map(preceded(ws(tag("ncol:")), ws(uint)), FacetArg::Ncol),
        )),
    )(input)?;

    let (input, _) = ws(char(')'))(input)?;

    let mut by = None;
    let mut ncol = None;
    for arg in args {
        match arg {
            FacetArg::By(f) => by = Some(f),
            FacetArg::Ncol(n) => ncol = Some(n),
        }
    }

    match by {
        Some(by) if ncol != Some(0) => Ok((input, Facet { by, ncol })),
        _ => Err(nom::Err::Error(Error::new(start, ErrorKind::Verify))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::FieldType;

    #[test]
    fn test_parse_facet_wrap() {
        let (_, facet) = parse_facet_wrap("facet_wrap(by: Measurement)").unwrap();
        assert_eq!(facet.by.field, "Measurement");
        assert_eq!(facet.ncol, None);
    }

    #[test]
    fn test_parse_facet_wrap_full() {
        let (_, facet) = parse_facet_wrap("facet_wrap(ncol: 2, by: Measurement:O)").unwrap();
        assert_eq!(facet.by.field_type, Some(FieldType::Ordinal));
        assert_eq!(facet.ncol, Some(2));
    }

    #[test]
    fn test_parse_facet_wrap_requires_by() {
        assert!(parse_facet_wrap("facet_wrap(ncol: 2)").is_err());
    }

    #[test]
    fn test_parse_facet_wrap_zero_columns() {
        assert!(parse_facet_wrap("facet_wrap(by: m, ncol: 0)").is_err());
    }
}
