//! Chart specifications in the Vega-Lite v5 JSON grammar.
//!
//! All specs are plain values. Builder methods take `self` and return the
//! extended spec, so deriving several layers from one base chart is a matter
//! of cloning it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::data::PlotData;
use crate::encoding::{Channel, ChannelDef, ChannelEncoding, Encoding, FieldDef};
use crate::error::ChartResult;
use crate::selection::Param;

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Inline data records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Data {
    pub values: Vec<Map<String, Value>>,
}

impl From<&PlotData> for Data {
    fn from(data: &PlotData) -> Self {
        Data {
            values: data.to_records(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Line,
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolate {
    Linear,
    Monotone,
    Basis,
    Cardinal,
    Step,
    StepBefore,
    StepAfter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkDef {
    #[serde(rename = "type")]
    pub mark_type: MarkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolate: Option<Interpolate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl MarkDef {
    pub fn new(mark_type: MarkType) -> Self {
        Self {
            mark_type,
            clip: None,
            interpolate: None,
            size: None,
        }
    }
}

/// A single-view chart: data, one mark, its encodings and selections.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Chart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<MarkDef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
    #[serde(skip_serializing_if = "Encoding::is_empty")]
    pub encoding: Encoding,
}

impl Chart {
    pub fn new(data: impl Into<Data>) -> Self {
        Self {
            data: Some(data.into()),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn mark(mut self, mark: MarkDef) -> Self {
        self.mark = Some(mark);
        self
    }

    pub fn add_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn encode(mut self, encoding: ChannelEncoding) -> Self {
        self.encoding.insert(encoding.channel, encoding.def);
        self
    }

    pub fn encode_channel(self, channel: Channel, def: ChannelDef) -> Self {
        self.encode(ChannelEncoding::new(channel, def))
    }

    /// Binds an interval selection to the scales so the view pans and zooms.
    pub fn interactive(self, name: impl Into<String>) -> Self {
        self.add_param(Param::pan_zoom(name))
    }

    pub fn mark_type(&self) -> Option<MarkType> {
        self.mark.as_ref().map(|m| m.mark_type)
    }
}

/// Charts drawn on top of each other, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerChart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub layer: Vec<Chart>,
}

impl LayerChart {
    /// Layers the charts. Data, title and size common to every layer move up
    /// to the layered chart.
    pub fn new(mut layer: Vec<Chart>) -> Self {
        let data = hoist(&mut layer, |c| &mut c.data);
        let title = hoist(&mut layer, |c| &mut c.title);
        let width = hoist(&mut layer, |c| &mut c.width);
        let height = hoist(&mut layer, |c| &mut c.height);
        Self {
            data,
            title,
            width,
            height,
            layer,
        }
    }

    pub fn layers(&self) -> &[Chart] {
        &self.layer
    }

    /// Repeats the layered view once per value of `field`, wrapping after
    /// `columns` panels.
    pub fn facet_wrap(mut self, field: FieldDef, columns: Option<u32>) -> FacetChart {
        FacetChart {
            data: self.data.take(),
            title: self.title.take(),
            facet: field,
            columns,
            spec: self,
        }
    }
}

/// Takes `prop` out of every layer when all layers agree on it.
fn hoist<T, F>(layers: &mut [Chart], mut prop: F) -> Option<T>
where
    T: PartialEq + Clone,
    F: FnMut(&mut Chart) -> &mut Option<T>,
{
    let (first, rest) = layers.split_first_mut()?;
    let shared = prop(first).clone()?;
    if rest.iter_mut().any(|c| prop(c).as_ref() != Some(&shared)) {
        return None;
    }
    for chart in layers.iter_mut() {
        *prop(chart) = None;
    }
    Some(shared)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetChart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub facet: FieldDef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    pub spec: LayerChart,
}

/// Adds the `$schema` header expected at the top of a standalone spec.
#[derive(Debug, Serialize)]
pub struct TopLevel<'a, T: Serialize> {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    #[serde(flatten)]
    pub spec: &'a T,
}

impl<'a, T: Serialize> TopLevel<'a, T> {
    pub fn new(spec: &'a T) -> Self {
        Self {
            schema: VEGA_LITE_SCHEMA,
            spec,
        }
    }
}

pub fn to_vega_lite<T: Serialize>(spec: &T) -> ChartResult<Value> {
    Ok(serde_json::to_value(TopLevel::new(spec))?)
}

pub fn to_vega_lite_string<T: Serialize>(spec: &T) -> ChartResult<String> {
    Ok(serde_json::to_string_pretty(&TopLevel::new(spec))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::FieldType;
    use serde_json::json;

    fn data() -> PlotData {
        PlotData::new(
            vec!["x".to_string(), "y".to_string()],
            vec![vec![json!(1), json!(2)]],
        )
    }

    #[test]
    fn test_chart_json() {
        let chart = Chart::new(&data())
            .mark(MarkDef::new(MarkType::Line))
            .encode(ChannelEncoding::x(FieldDef::new("x", FieldType::Quantitative)));
        assert_eq!(
            serde_json::to_value(&chart).unwrap(),
            json!({
                "data": {"values": [{"x": 1, "y": 2}]},
                "mark": {"type": "line"},
                "encoding": {"x": {"field": "x", "type": "quantitative"}}
            })
        );
    }

    #[test]
    fn test_encode_replaces_in_place() {
        let chart = Chart::default()
            .encode_channel(Channel::X, ChannelDef::value(1))
            .encode_channel(Channel::Y, ChannelDef::value(2))
            .encode_channel(Channel::X, ChannelDef::value(3));
        let keys: Vec<Channel> = chart.encoding.keys().copied().collect();
        assert_eq!(keys, vec![Channel::X, Channel::Y]);
        assert_eq!(chart.encoding[&Channel::X], ChannelDef::value(3));
    }

    #[test]
    fn test_layer_hoists_shared_properties() {
        let base = Chart::new(&data()).size(400, 300).title("t");
        let layered = LayerChart::new(vec![
            base.clone().mark(MarkDef::new(MarkType::Line)),
            base.mark(MarkDef::new(MarkType::Circle)),
        ]);
        assert!(layered.data.is_some());
        assert_eq!(layered.width, Some(400));
        assert_eq!(layered.title.as_deref(), Some("t"));
        assert!(layered.layers().iter().all(|c| c.data.is_none() && c.width.is_none()));
    }

    #[test]
    fn test_layer_keeps_differing_properties() {
        let layered = LayerChart::new(vec![
            Chart::default().size(100, 100),
            Chart::default().size(200, 100),
        ]);
        assert_eq!(layered.width, None);
        assert_eq!(layered.height, Some(100));
        assert_eq!(layered.layers()[1].width, Some(200));
    }

    #[test]
    fn test_facet_wrap_moves_data_up() {
        let layered = LayerChart::new(vec![Chart::new(&data()).mark(MarkDef::new(MarkType::Line))]);
        let faceted = layered.facet_wrap(FieldDef::new("y", FieldType::Nominal), Some(2));
        let value = serde_json::to_value(&faceted).unwrap();
        assert!(value.get("data").is_some());
        assert_eq!(value["columns"], json!(2));
        assert!(value["spec"].get("data").is_none());
        assert_eq!(value["spec"]["layer"][0]["mark"]["type"], json!("line"));
    }

    #[test]
    fn test_top_level_schema() {
        let value = to_vega_lite(&Chart::default().mark(MarkDef::new(MarkType::Circle))).unwrap();
        assert_eq!(value["$schema"], json!(VEGA_LITE_SCHEMA));
        assert_eq!(value["mark"]["type"], json!("circle"));
    }

    #[test]
    fn test_interpolate_names() {
        assert_eq!(serde_json::to_value(Interpolate::StepAfter).unwrap(), json!("step-after"));
        assert_eq!(serde_json::to_value(Interpolate::Monotone).unwrap(), json!("monotone"));
    }
}
