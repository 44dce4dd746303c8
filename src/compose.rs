//! Interactive line charts: a line layer driven by legend clicks and a
//! hidden point layer revealed on hover.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::chart::{Chart, Interpolate, LayerChart, MarkDef, MarkType};
use crate::encoding::{Channel, ChannelDef, ChannelEncoding, SymbolType};
use crate::selection::Param;

/// Mark styling and selection names for [`interactive_line_with`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteractiveStyle {
    pub line_interpolate: Interpolate,
    /// Line opacity for entries picked in the legend (or when none is picked).
    pub selected_opacity: f64,
    /// Line opacity for entries not picked in the legend.
    pub dimmed_opacity: f64,
    pub point_size: f64,
    pub hover_fill_opacity: f64,
    pub hidden_fill_opacity: f64,
    /// Prepended to every selection name so that several interactive charts
    /// can be concatenated into one view.
    pub selection_prefix: String,
}

impl Default for InteractiveStyle {
    fn default() -> Self {
        Self {
            line_interpolate: Interpolate::Monotone,
            selected_opacity: 1.0,
            dimmed_opacity: 0.2,
            point_size: 100.0,
            hover_fill_opacity: 0.3,
            hidden_fill_opacity: 0.0,
            selection_prefix: String::new(),
        }
    }
}

impl InteractiveStyle {
    pub fn legend_selection(&self) -> String {
        format!("{}legend", self.selection_prefix)
    }

    pub fn hover_selection(&self) -> String {
        format!("{}hover", self.selection_prefix)
    }

    pub fn pan_zoom_selection(&self) -> String {
        format!("{}pan_zoom", self.selection_prefix)
    }
}

/// Layers a line chart and a point chart derived from `chart`, both encoding
/// `legend_channel`, with the default [`InteractiveStyle`].
pub fn interactive_line(chart: &Chart, legend_channel: &ChannelEncoding) -> LayerChart {
    interactive_line_with(chart, legend_channel, &InteractiveStyle::default())
}

/// Layers a line chart and a point chart derived from `chart`.
///
/// The line layer owns the legend selection: clicking legend entries toggles
/// them, and lines of entries not picked are dimmed. It also carries pan and
/// zoom. The point layer shows a marker under the pointer and is deliberately
/// not tied to the legend selection, since doing so breaks legend clicks on
/// non-faceted charts.
///
/// `legend_channel` should set its legend symbol to [`SymbolType::Stroke`];
/// otherwise the legend takes the circle symbol of the point layer.
///
/// The line layer must come first. With the point layer first, legend clicks
/// stop selecting anything.
pub fn interactive_line_with(
    chart: &Chart,
    legend_channel: &ChannelEncoding,
    style: &InteractiveStyle,
) -> LayerChart {
    if legend_channel.legend_symbol() != Some(SymbolType::Stroke) {
        warn!(
            channel = ?legend_channel.channel,
            "legend channel does not use stroke symbols; the legend will show circles"
        );
    }

    let legend = Param::legend(style.legend_selection(), legend_channel.channel);
    let hover = Param::hover(style.hover_selection());

    let line = chart
        .clone()
        .mark(MarkDef {
            clip: Some(true),
            interpolate: Some(style.line_interpolate),
            ..MarkDef::new(MarkType::Line)
        })
        .add_param(legend)
        .encode(legend_channel.clone())
        .encode_channel(
            Channel::Opacity,
            ChannelDef::conditional(
                style.legend_selection(),
                None,
                style.selected_opacity,
                style.dimmed_opacity,
            ),
        )
        .interactive(style.pan_zoom_selection());

    let points = chart
        .clone()
        .mark(MarkDef {
            clip: Some(true),
            size: Some(style.point_size),
            ..MarkDef::new(MarkType::Circle)
        })
        .add_param(hover)
        .encode(legend_channel.clone())
        .encode_channel(
            Channel::FillOpacity,
            ChannelDef::conditional(
                style.hover_selection(),
                Some(false),
                style.hover_fill_opacity,
                style.hidden_fill_opacity,
            ),
        );

    let layered = LayerChart::new(vec![line, points]);
    debug!(layers = layered.layers().len(), "composed interactive line chart");
    layered
}
