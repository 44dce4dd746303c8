// Library exports for chartprep

pub mod chart;
pub mod compose;
pub mod csv_reader;
pub mod data;
pub mod encoding;
pub mod error;
pub mod parser;
pub mod prepare;
pub mod runtime;
pub mod selection;
pub mod table;
pub mod telemetry;

use std::fs;
use std::path::Path;

use serde::Deserialize;

pub use compose::{interactive_line, interactive_line_with, InteractiveStyle};
pub use data::PlotData;
pub use error::{ChartError, ChartResult};
pub use prepare::{prepare, ColumnsMapping};
pub use table::{ColumnKey, Table};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartOptions {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Used when the pipeline sets no title
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub style: InteractiveStyle,
}

fn default_width() -> u32 { 800 }
fn default_height() -> u32 { 600 }

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: None,
            style: InteractiveStyle::default(),
        }
    }
}

impl ChartOptions {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_json_file(path: &Path) -> ChartResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let options = ChartOptions::from_json_str("{}").unwrap();
        assert_eq!(options, ChartOptions::default());
    }

    #[test]
    fn test_options_partial() {
        let options =
            ChartOptions::from_json_str(r#"{"width": 500, "style": {"point_size": 60}}"#).unwrap();
        assert_eq!(options.width, 500);
        assert_eq!(options.height, 600);
        assert_eq!(options.style.point_size, 60.0);
        assert_eq!(options.style.dimmed_opacity, 0.2);
    }

    #[test]
    fn test_options_bad_json() {
        assert!(matches!(
            ChartOptions::from_json_str("{\"width\": \"wide\"}"),
            Err(ChartError::Json(_))
        ));
    }
}
