// Runtime executor for the chart pipeline DSL

use crate::chart::{self, Chart, FacetChart, LayerChart};
use crate::compose::interactive_line_with;
use crate::data::PlotData;
use crate::encoding::{ChannelEncoding, FieldDef, FieldType, Legend, Scale, ScaleType, SymbolType};
use crate::parser::ast::{AxisScale, FieldRef, PlotSpec};
use crate::prepare::{prepare, ColumnsMapping};
use crate::table::Table;
use crate::ChartOptions;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

/// A composed chart, faceted or not
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComposedChart {
    Layered(LayerChart),
    Faceted(FacetChart),
}

impl ComposedChart {
    pub fn layers(&self) -> &[Chart] {
        match self {
            ComposedChart::Layered(l) => l.layers(),
            ComposedChart::Faceted(f) => f.spec.layers(),
        }
    }
}

/// Prepare the table and render the chart specification as Vega-Lite JSON
pub fn render_chart(
    table: &Table,
    mapping: &ColumnsMapping,
    spec: &PlotSpec,
    options: &ChartOptions,
) -> Result<String> {
    let data = prepare(table, mapping).context("Failed to prepare table for charting")?;
    let composed = build_chart(spec, &data, options)?;
    let json = chart::to_vega_lite_string(&composed).context("Failed to serialize chart")?;
    info!(
        rows = data.n_rows(),
        layers = composed.layers().len(),
        faceted = matches!(composed, ComposedChart::Faceted(_)),
        "rendered chart specification"
    );
    Ok(json)
}

/// Compose the interactive line chart described by `spec` over `data`
pub fn build_chart(spec: &PlotSpec, data: &PlotData, options: &ChartOptions) -> Result<ComposedChart> {
    let aes = &spec.aesthetics;
    let labels = spec.labels.clone().unwrap_or_default();

    let color = aes
        .color
        .as_ref()
        .context("Interactive line charts need a color aesthetic for the legend (aes(..., color: col))")?;

    let x = axis_field(&aes.x, data, labels.x.as_deref(), spec.x_scale)?;
    let y = axis_field(&aes.y, data, labels.y.as_deref(), spec.y_scale)?;

    require_column(data, &color.field)?;
    let legend_channel = ChannelEncoding::color(
        FieldDef::new(&color.field, color.type_or(FieldType::Nominal)).with_legend(Legend {
            title: labels.color.clone(),
            symbol_type: Some(SymbolType::Stroke),
        }),
    );

    let mut base = Chart::new(data)
        .encode(ChannelEncoding::x(x))
        .encode(ChannelEncoding::y(y))
        .size(options.width, options.height);
    if let Some(title) = labels.title.as_ref().or(options.title.as_ref()) {
        base = base.title(title);
    }

    let layered = interactive_line_with(&base, &legend_channel, &options.style);

    match &spec.facet {
        Some(facet) => {
            require_column(data, &facet.by.field)?;
            let by = FieldDef::new(&facet.by.field, facet.by.type_or(FieldType::Nominal));
            Ok(ComposedChart::Faceted(layered.facet_wrap(by, facet.ncol)))
        }
        None => Ok(ComposedChart::Layered(layered)),
    }
}

fn axis_field(
    field: &FieldRef,
    data: &PlotData,
    title: Option<&str>,
    scale: Option<AxisScale>,
) -> Result<FieldDef> {
    require_column(data, &field.field)?;
    let mut def = FieldDef::new(&field.field, field.type_or(FieldType::Quantitative));
    if let Some(title) = title {
        def = def.with_title(title);
    }
    if let Some(scale) = scale {
        let scale_type = match scale {
            AxisScale::Linear => ScaleType::Linear,
            AxisScale::Log10 => ScaleType::Log,
        };
        def = def.with_scale(Scale {
            scale_type: Some(scale_type),
        });
    }
    Ok(def)
}

fn require_column(data: &PlotData, field: &str) -> Result<()> {
    if data.headers.iter().any(|h| h == field) {
        return Ok(());
    }
    anyhow::bail!(
        "Column '{}' not found in prepared data (available: {})",
        field,
        data.headers.join(", ")
    )
}
