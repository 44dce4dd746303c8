//! Reshapes a structured table into the flat layout a chart expects.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::data::PlotData;
use crate::error::{ChartError, ChartResult};
use crate::table::{ColumnKey, Table};

/// Full column key (after the index is flattened) to display name. Insertion
/// order is the output column order.
pub type ColumnsMapping = IndexMap<ColumnKey, String>;

/// Prepares `table` for charting.
///
/// The row index is moved into leading columns, then the columns named by
/// `columns_mapping` are selected in mapping order and renamed. Columns not in
/// the mapping are dropped. Keys are matched against the full column key, so
/// with multi-level columns a key must name every level.
pub fn prepare(table: &Table, columns_mapping: &ColumnsMapping) -> ChartResult<PlotData> {
    let flat = table.reset_index()?;

    let mut positions = Vec::with_capacity(columns_mapping.len());
    let mut seen = HashSet::with_capacity(columns_mapping.len());
    for (key, name) in columns_mapping {
        let idx = flat.position(key).ok_or_else(|| ChartError::MissingColumn {
            key: key.clone(),
            available: flat.columns().to_vec(),
        })?;
        if !seen.insert(name.as_str()) {
            return Err(ChartError::DuplicateDisplayName(name.clone()));
        }
        positions.push(idx);
    }

    let headers = columns_mapping.values().cloned().collect();
    let rows = flat
        .rows()
        .iter()
        .map(|row| positions.iter().map(|&i| row[i].clone()).collect())
        .collect();

    let data = PlotData::new(headers, rows);
    debug!(
        rows = data.n_rows(),
        columns = ?data.headers,
        dropped = flat.columns().len() - positions.len(),
        "prepared table for charting"
    );
    Ok(data)
}
