use nom::{
    bytes::complete::tag,
    character::complete::multispace0,
    branch::alt,
    combinator::map,
    sequence::delimited,
    IResult,
};
use crate::parser::ast::AxisScale;
use crate::parser::lexer::ws;

fn empty_args(input: &str) -> IResult<&str, &str> {
    ws(delimited(tag("("), multispace0, tag(")")))(input)
}

pub fn parse_scale_x_log10(input: &str) -> IResult<&str, AxisScale> {
    let (input, _) = ws(tag("scale_x_log10"))(input)?;
    let (input, _) = empty_args(input)?;
    Ok((input, AxisScale::Log10))
}

pub fn parse_scale_y_log10(input: &str) -> IResult<&str, AxisScale> {
    let (input, _) = ws(tag("scale_y_log10"))(input)?;
    let (input, _) = empty_args(input)?;
    Ok((input, AxisScale::Log10))
}

pub fn parse_scale_x_continuous(input: &str) -> IResult<&str, AxisScale> {
    let (input, _) = ws(tag("scale_x_continuous"))(input)?;
    let (input, _) = empty_args(input)?;
    Ok((input, AxisScale::Linear))
}

pub fn parse_scale_y_continuous(input: &str) -> IResult<&str, AxisScale> {
    let (input, _) = ws(tag("scale_y_continuous"))(input)?;
    let (input, _) = empty_args(input)?;
    Ok((input, AxisScale::Linear))
}

/// Returns `(is_x, scale)`
pub fn parse_scale_command(input: &str) -> IResult<&str, (bool, AxisScale)> {
    alt((
        map(parse_scale_x_log10, |s| (true, s)),
        map(parse_scale_y_log10, |s| (false, s)),
        map(parse_scale_x_continuous, |s| (true, s)),
        map(parse_scale_y_continuous, |s| (false, s)),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scale_x_log10() {
        assert_eq!(parse_scale_command("scale_x_log10()"), Ok(("", (true, AxisScale::Log10))));
    }

    #[test]
    fn test_parse_scale_y_continuous() {
        assert_eq!(
            parse_scale_command(" scale_y_continuous( ) "),
            Ok(("", (false, AxisScale::Linear)))
        );
    }

    #[test]
    fn test_parse_scale_unknown() {
        assert!(parse_scale_command("scale_x_sqrt()").is_err());
    }
}
