// Columns mapping parser
//
// Format: (metric, year) -> "Year", value -> "Value"
// A key is a bare label or a parenthesised tuple of labels naming every
// column level; a trailing comma makes a one-level tuple: ("year",)

use super::lexer::{label, ws};
use crate::prepare::ColumnsMapping;
use crate::table::ColumnKey;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{eof, map, opt},
    error::{Error, ErrorKind},
    multi::separated_list1,
    sequence::{delimited, separated_pair, terminated},
    IResult,
};

/// Parse a column key: `value`, `"Sound Power"`, `(spl, on_axis)`, `("year",)`
pub fn parse_column_key(input: &str) -> IResult<&str, ColumnKey> {
    alt((
        map(
            delimited(
                ws(char('(')),
                terminated(separated_list1(ws(char(',')), ws(label)), opt(ws(char(',')))),
                ws(char(')')),
            ),
            ColumnKey::from,
        ),
        map(ws(label), ColumnKey::single),
    ))(input)
}

fn parse_entry(input: &str) -> IResult<&str, (ColumnKey, String)> {
    separated_pair(parse_column_key, ws(tag("->")), ws(label))(input)
}

/// Parse a complete columns mapping. Keys must be unique.
pub fn parse_columns_mapping(input: &str) -> IResult<&str, ColumnsMapping> {
    let (rest, entries) = separated_list1(ws(char(',')), parse_entry)(input)?;
    let (rest, _) = ws(eof)(rest)?;

    let mut mapping = ColumnsMapping::with_capacity(entries.len());
    for (key, name) in entries {
        if mapping.insert(key, name).is_some() {
            return Err(nom::Err::Failure(Error::new(input, ErrorKind::Verify)));
        }
    }
    Ok((rest, mapping))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_labels() {
        let (_, mapping) = parse_columns_mapping(r#"year -> "Year", value -> Value"#).unwrap();
        let entries: Vec<(ColumnKey, String)> = mapping.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                (ColumnKey::single("year"), "Year".to_string()),
                (ColumnKey::single("value"), "Value".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_tuple_keys() {
        let (_, mapping) =
            parse_columns_mapping(r#"("freq", "") -> Frequency, (spl, on_axis) -> "On Axis""#)
                .unwrap();
        assert_eq!(mapping[&ColumnKey::from(["freq", ""])], "Frequency");
        assert_eq!(mapping[&ColumnKey::from(["spl", "on_axis"])], "On Axis");
    }

    #[test]
    fn test_parse_one_tuple_trailing_comma() {
        let (_, mapping) = parse_columns_mapping(r#"("year",) -> Year"#).unwrap();
        assert!(mapping.contains_key(&ColumnKey::single("year")));
    }

    #[test]
    fn test_parse_keeps_order() {
        let (_, mapping) = parse_columns_mapping("b -> B, a -> A, c -> C").unwrap();
        let names: Vec<&str> = mapping.values().map(String::as_str).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_parse_duplicate_key() {
        assert!(parse_columns_mapping("a -> A, a -> B").is_err());
    }

    #[test]
    fn test_parse_missing_arrow() {
        assert!(parse_columns_mapping("a A").is_err());
    }

    #[test]
    fn test_parse_trailing_garbage() {
        assert!(parse_columns_mapping("a -> A |").is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_columns_mapping("").is_err());
    }
}
