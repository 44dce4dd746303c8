use serde_json::{Map, Value};

use crate::error::{ChartError, ChartResult};

/// A flat table: simple column names, no index. This is the shape charting
/// grammars consume.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl PlotData {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { headers, rows }
    }

    /// Create PlotData from a JSON Array of Objects
    pub fn from_json(value: &Value) -> ChartResult<Self> {
        let array = value.as_array().ok_or_else(|| {
            ChartError::InvalidData("input data must be a JSON array of objects".to_string())
        })?;

        let first_obj = match array.first() {
            Some(item) => item.as_object().ok_or_else(|| {
                ChartError::InvalidData("items in array must be objects".to_string())
            })?,
            None => {
                return Err(ChartError::InvalidData(
                    "input data array is empty".to_string(),
                ))
            }
        };

        let headers: Vec<String> = first_obj.keys().cloned().collect();

        let mut rows = Vec::with_capacity(array.len());
        for item in array {
            let obj = item.as_object().ok_or_else(|| {
                ChartError::InvalidData("items in array must be objects".to_string())
            })?;

            let mut row = Vec::with_capacity(headers.len());
            for header in &headers {
                match obj.get(header) {
                    Some(v @ (Value::Array(_) | Value::Object(_))) => {
                        return Err(ChartError::InvalidData(format!(
                            "unsupported value {} for field '{}'",
                            v, header
                        )))
                    }
                    Some(v) => row.push(v.clone()),
                    None => row.push(Value::Null),
                }
            }
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// One JSON object per row, keyed by header. This is the record layout
    /// used for inline chart data.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }
}
