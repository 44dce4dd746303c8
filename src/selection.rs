//! Declarative interactive selections. The renderer evaluates them; charts
//! only declare them and reference them by name from conditional encodings.

use serde::{Deserialize, Serialize};

use crate::encoding::Channel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    Point,
    Interval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bind {
    /// Clicking legend entries drives the selection.
    Legend,
    /// Interval selection drives the scale domains (pan and zoom).
    Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionDef {
    #[serde(rename = "type")]
    pub selection_type: SelectionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encodings: Option<Vec<Channel>>,
}

impl SelectionDef {
    fn new(selection_type: SelectionType) -> Self {
        Self {
            selection_type,
            on: None,
            toggle: None,
            encodings: None,
        }
    }
}

/// A named selection parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub select: SelectionDef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<Bind>,
}

impl Param {
    /// Multi-select over the values of `channel`, driven by clicks on the
    /// legend. Each click toggles one entry.
    pub fn legend(name: impl Into<String>, channel: Channel) -> Self {
        Self {
            name: name.into(),
            select: SelectionDef {
                toggle: Some(true),
                encodings: Some(vec![channel]),
                ..SelectionDef::new(SelectionType::Point)
            },
            bind: Some(Bind::Legend),
        }
    }

    /// Single mark under the pointer.
    pub fn hover(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            select: SelectionDef {
                on: Some("mouseover".to_string()),
                toggle: Some(false),
                ..SelectionDef::new(SelectionType::Point)
            },
            bind: None,
        }
    }

    /// Drag to pan, scroll to zoom.
    pub fn pan_zoom(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            select: SelectionDef::new(SelectionType::Interval),
            bind: Some(Bind::Scales),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_legend_param_json() {
        let param = Param::legend("legend", Channel::Color);
        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            json!({
                "name": "legend",
                "select": {"type": "point", "toggle": true, "encodings": ["color"]},
                "bind": "legend"
            })
        );
    }

    #[test]
    fn test_hover_param_json() {
        let param = Param::hover("hover");
        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            json!({
                "name": "hover",
                "select": {"type": "point", "on": "mouseover", "toggle": false}
            })
        );
    }

    #[test]
    fn test_pan_zoom_param_json() {
        let param = Param::pan_zoom("grid");
        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            json!({"name": "grid", "select": {"type": "interval"}, "bind": "scales"})
        );
    }
}
