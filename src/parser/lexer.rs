// Shared tokens for the DSL parsers

use nom::{
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag, take_while},
    character::complete::{char, multispace0, satisfy},
    combinator::{map, opt, recognize, value},
    sequence::{delimited, pair},
    IResult,
};

/// Wrap a parser so it skips surrounding whitespace
pub fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Bare column name: a letter or underscore followed by letters, digits or
/// underscores. Non-ASCII letters are accepted.
pub fn identifier(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(
            satisfy(|c| c.is_alphabetic() || c == '_'),
            take_while(|c: char| c.is_alphanumeric() || c == '_'),
        )),
        String::from,
    )(input)
}

/// Double-quoted string with `\"` and `\\` escapes
pub fn string_literal(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        map(
            opt(escaped_transform(
                is_not("\\\""),
                '\\',
                alt((value("\\", tag("\\")), value("\"", tag("\"")))),
            )),
            Option::unwrap_or_default,
        ),
        char('"'),
    )(input)
}

/// A label is either a bare identifier or a quoted string
pub fn label(input: &str) -> IResult<&str, String> {
    alt((string_literal, identifier))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        assert_eq!(identifier("year rest"), Ok((" rest", "year".to_string())));
        assert_eq!(identifier("température,").unwrap().1, "température");
        assert!(identifier("2020").is_err());
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(string_literal(r#""On Axis""#).unwrap().1, "On Axis");
        assert_eq!(string_literal(r#""""#).unwrap().1, "");
        assert_eq!(string_literal(r#""say \"hi\"""#).unwrap().1, r#"say "hi""#);
        assert!(string_literal(r#""open"#).is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(label("metric").unwrap().1, "metric");
        assert_eq!(label(r#""Sound Power""#).unwrap().1, "Sound Power");
    }

    #[test]
    fn test_ws() {
        assert_eq!(ws(tag("aes"))("  aes  ("), Ok(("(", "aes")));
    }
}
