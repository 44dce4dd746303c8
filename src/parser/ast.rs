// Abstract Syntax Tree for the chart pipeline DSL

use crate::encoding::FieldType;

/// Complete chart specification
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub aesthetics: Aesthetics,
    pub facet: Option<Facet>,
    pub labels: Option<Labels>,
    pub x_scale: Option<AxisScale>,
    pub y_scale: Option<AxisScale>,
}

/// A column reference with an optional type suffix (`Frequency:Q`)
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRef {
    pub field: String,
    pub field_type: Option<FieldType>,
}

impl FieldRef {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            field_type: None,
        }
    }

    /// The declared type, or `default` when none was given
    pub fn type_or(&self, default: FieldType) -> FieldType {
        self.field_type.unwrap_or(default)
    }
}

/// Aesthetic mappings (data columns → visual properties)
#[derive(Debug, Clone, PartialEq)]
pub struct Aesthetics {
    pub x: FieldRef,
    pub y: FieldRef,
    /// Legend channel of the interactive chart
    pub color: Option<FieldRef>,
}

/// One panel per value of `by`
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    pub by: FieldRef,
    pub ncol: Option<u32>,
}

/// Chart labels (title, axes, legend)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Labels {
    pub title: Option<String>,
    pub x: Option<String>,
    pub y: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log10,
}
