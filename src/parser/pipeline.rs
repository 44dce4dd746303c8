// Pipeline parser for the chart DSL

use super::aesthetics::parse_aesthetics;
use super::ast::{Aesthetics, AxisScale, Facet, Labels, PlotSpec};
use super::facet::parse_facet_wrap;
use super::labels::parse_labs;
use super::lexer::ws;
use super::scale::parse_scale_command;
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{eof, map, opt},
    error::{Error, ErrorKind},
    multi::separated_list0,
    IResult,
};

#[derive(Debug)]
enum PipelineComponent {
    Aes(Aesthetics),
    Facet(Facet),
    Labels(Labels),
    Scale(bool, AxisScale), // is_x, scale
}

fn parse_pipeline_component(input: &str) -> IResult<&str, PipelineComponent> {
    alt((
        map(parse_aesthetics, PipelineComponent::Aes),
        map(parse_facet_wrap, PipelineComponent::Facet),
        map(parse_labs, PipelineComponent::Labels),
        map(parse_scale_command, |(is_x, s)| PipelineComponent::Scale(is_x, s)),
    ))(input)
}

/// Parse a complete chart specification
/// Format: component | component | ...
pub fn parse_plot_spec(input: &str) -> IResult<&str, PlotSpec> {
    // Optional: consume leading "df"
    let (input, _) = opt(ws(tag("df")))(input)?;

    // If input starts with "|", consume it
    let (input, _) = opt(ws(tag("|")))(input)?;

    let (input, components) = separated_list0(
        ws(tag("|")),
        parse_pipeline_component
    )(input)?;

    let (input, _) = ws(eof)(input)?;

    let mut aesthetics = None;
    let mut facet = None;
    let mut labels = None;
    let mut x_scale = None;
    let mut y_scale = None;

    // Later components override earlier ones
    for comp in components {
        match comp {
            PipelineComponent::Aes(a) => aesthetics = Some(a),
            PipelineComponent::Facet(f) => facet = Some(f),
            PipelineComponent::Labels(l) => labels = Some(l),
            PipelineComponent::Scale(is_x, s) => {
                if is_x { x_scale = Some(s); } else { y_scale = Some(s); }
            }
        }
    }

    // Validation: aesthetics are required
    let aesthetics = match aesthetics {
        Some(a) => a,
        None => return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify))),
    };

    Ok((
        input,
        PlotSpec {
            aesthetics,
            facet,
            labels,
            x_scale,
            y_scale,
        },
    ))
}
