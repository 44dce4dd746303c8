//! Encoding channels: how data fields and constant values map onto visual
//! properties of a mark.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Visual property a definition is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    X,
    Y,
    Color,
    Fill,
    Stroke,
    Opacity,
    FillOpacity,
    StrokeOpacity,
    StrokeDash,
    Shape,
    Size,
    Tooltip,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Quantitative,
    Nominal,
    Ordinal,
    Temporal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolType {
    Circle,
    Square,
    Cross,
    Diamond,
    Stroke,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_type: Option<SymbolType>,
}

impl Legend {
    pub fn symbol(symbol_type: SymbolType) -> Self {
        Self {
            title: None,
            symbol_type: Some(symbol_type),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Linear,
    Log,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ScaleType>,
}

/// A channel bound to a data field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

impl FieldDef {
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: field.into(),
            field_type,
            title: None,
            scale: None,
            legend: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }
}

/// A channel set to a constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDef {
    pub value: Value,
}

/// Value used while a selection holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub param: String,
    /// Whether an empty selection counts as matching every mark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<bool>,
    pub value: Value,
}

/// A constant gated by a selection: `condition.value` while the selection
/// holds, `value` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalValueDef {
    pub condition: Condition,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelDef {
    Conditional(ConditionalValueDef),
    Field(FieldDef),
    Value(ValueDef),
}

impl ChannelDef {
    pub fn value(value: impl Into<Value>) -> Self {
        ChannelDef::Value(ValueDef {
            value: value.into(),
        })
    }

    /// Conditional constant. With `empty = None` the renderer treats an empty
    /// selection as matching everything.
    pub fn conditional(
        param: impl Into<String>,
        empty: Option<bool>,
        if_selected: impl Into<Value>,
        otherwise: impl Into<Value>,
    ) -> Self {
        ChannelDef::Conditional(ConditionalValueDef {
            condition: Condition {
                param: param.into(),
                empty,
                value: if_selected.into(),
            },
            value: otherwise.into(),
        })
    }

    pub fn as_field(&self) -> Option<&FieldDef> {
        match self {
            ChannelDef::Field(def) => Some(def),
            _ => None,
        }
    }
}

impl From<FieldDef> for ChannelDef {
    fn from(def: FieldDef) -> Self {
        ChannelDef::Field(def)
    }
}

/// A definition together with the channel it encodes, e.g. a color legend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelEncoding {
    pub channel: Channel,
    pub def: ChannelDef,
}

impl ChannelEncoding {
    pub fn new(channel: Channel, def: impl Into<ChannelDef>) -> Self {
        Self {
            channel,
            def: def.into(),
        }
    }

    pub fn x(def: FieldDef) -> Self {
        Self::new(Channel::X, def)
    }

    pub fn y(def: FieldDef) -> Self {
        Self::new(Channel::Y, def)
    }

    pub fn color(def: FieldDef) -> Self {
        Self::new(Channel::Color, def)
    }

    /// The legend symbol configured on this channel, if any.
    pub fn legend_symbol(&self) -> Option<SymbolType> {
        self.def
            .as_field()
            .and_then(|f| f.legend.as_ref())
            .and_then(|l| l.symbol_type)
    }
}

/// Channel definitions of a chart in declaration order. Re-encoding a
/// channel replaces its definition in place.
pub type Encoding = IndexMap<Channel, ChannelDef>;
