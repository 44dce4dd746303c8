// CSV loading into structured tables

use std::io::{self, Read};

use serde_json::Value;

use crate::error::{ChartError, ChartResult};
use crate::table::{ColumnKey, Table};

/// Layout of the CSV header and index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvLayout {
    /// Leading columns that form the row index.
    pub index_cols: usize,
    /// Header rows; one per column level.
    pub header_rows: usize,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            index_cols: 0,
            header_rows: 1,
        }
    }
}

/// Read a CSV table from stdin
pub fn read_csv_from_stdin(layout: CsvLayout) -> ChartResult<Table> {
    read_csv(io::stdin().lock(), layout)
}

/// Read a CSV table.
///
/// Index level names are taken from the first header row; an empty header
/// cell leaves the level unnamed. Cells that parse as numbers become JSON
/// numbers, empty cells become null, everything else stays a string.
pub fn read_csv<R: Read>(reader: R, layout: CsvLayout) -> ChartResult<Table> {
    if layout.header_rows == 0 {
        return Err(ChartError::InvalidData(
            "CSV needs at least one header row".to_string(),
        ));
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for record in csv_reader.records() {
        records.push(record?);
    }

    if records.len() < layout.header_rows {
        return Err(ChartError::InvalidData(format!(
            "CSV has {} rows, expected {} header rows",
            records.len(),
            layout.header_rows
        )));
    }
    let (headers, body) = records.split_at(layout.header_rows);
    if body.is_empty() {
        return Err(ChartError::InvalidData(
            "CSV must contain at least one data row".to_string(),
        ));
    }

    let width = headers[0].len();
    if layout.index_cols > width {
        return Err(ChartError::InvalidData(format!(
            "{} index columns requested but CSV has {} columns",
            layout.index_cols, width
        )));
    }

    let columns = (layout.index_cols..width)
        .map(|j| ColumnKey::new(headers.iter().map(|h| h.get(j).unwrap_or(""))))
        .collect();

    let mut keys = Vec::with_capacity(body.len());
    let mut rows = Vec::with_capacity(body.len());
    for record in body {
        let cells: Vec<Value> = record.iter().map(parse_cell).collect();
        let (key, row) = cells.split_at(layout.index_cols.min(cells.len()));
        keys.push(key.to_vec());
        rows.push(row.to_vec());
    }

    let table = Table::new(columns, rows)?;
    if layout.index_cols == 0 {
        return Ok(table);
    }

    let names = (0..layout.index_cols)
        .map(|j| match headers[0].get(j) {
            Some(name) if !name.is_empty() => Some(name.to_string()),
            _ => None,
        })
        .collect();
    table.with_index(names, keys)
}

fn parse_cell(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::from(i);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() => Value::from(f),
        _ => Value::String(raw.to_string()),
    }
}
