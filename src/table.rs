//! Structured tables: a (possibly multi-level) row index plus columns keyed by
//! label tuples.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// Full identifier of a column: one label per column level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnKey(Vec<String>);

impl ColumnKey {
    pub fn new<I, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(levels.into_iter().map(Into::into).collect())
    }

    pub fn single(label: impl Into<String>) -> Self {
        Self(vec![label.into()])
    }

    pub fn levels(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pads with empty labels up to `levels`, the way a flattened index level
    /// is placed into a multi-level column header.
    pub fn padded(mut self, levels: usize) -> Self {
        while self.0.len() < levels {
            self.0.push(String::new());
        }
        self
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", label)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl From<&str> for ColumnKey {
    fn from(label: &str) -> Self {
        Self::single(label)
    }
}

impl From<String> for ColumnKey {
    fn from(label: String) -> Self {
        Self::single(label)
    }
}

impl<const N: usize> From<[&str; N]> for ColumnKey {
    fn from(levels: [&str; N]) -> Self {
        Self::new(levels)
    }
}

impl From<Vec<String>> for ColumnKey {
    fn from(levels: Vec<String>) -> Self {
        Self(levels)
    }
}

/// A table whose rows are addressed by a structured index.
///
/// Every row holds one cell per column and one key part per index level.
/// Tables built without an explicit index get an unnamed positional one.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    index_names: Vec<Option<String>>,
    index: Vec<Vec<Value>>,
    columns: Vec<ColumnKey>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<ColumnKey>, rows: Vec<Vec<Value>>) -> ChartResult<Self> {
        if let Some(first) = columns.first() {
            if first.is_empty() {
                return Err(ChartError::InvalidData(
                    "column keys need at least one level".to_string(),
                ));
            }
            if let Some(odd) = columns.iter().find(|c| c.len() != first.len()) {
                return Err(ChartError::InvalidData(format!(
                    "column {} has {} levels, expected {}",
                    odd,
                    odd.len(),
                    first.len()
                )));
            }
        }
        let mut seen = HashSet::with_capacity(columns.len());
        if let Some(dup) = columns.iter().find(|c| !seen.insert(*c)) {
            return Err(ChartError::DuplicateColumn(dup.clone()));
        }
        check_widths(&rows, columns.len())?;

        let index = (0..rows.len()).map(|i| vec![Value::from(i)]).collect();
        Ok(Self {
            index_names: vec![None],
            index,
            columns,
            rows,
        })
    }

    /// Replaces the positional index with a structured one.
    pub fn with_index(
        mut self,
        names: Vec<Option<String>>,
        keys: Vec<Vec<Value>>,
    ) -> ChartResult<Self> {
        if names.is_empty() {
            return Err(ChartError::InvalidData(
                "an index needs at least one level".to_string(),
            ));
        }
        if keys.len() != self.rows.len() {
            return Err(ChartError::InvalidData(format!(
                "index has {} keys for {} rows",
                keys.len(),
                self.rows.len()
            )));
        }
        check_widths(&keys, names.len())?;

        self.index_names = names;
        self.index = keys;
        Ok(self)
    }

    /// Builds a table from a JSON array of objects. The `index_fields` become
    /// index levels (in the given order); every other key of the first object
    /// becomes a single-level column.
    pub fn from_records(value: &Value, index_fields: &[&str]) -> ChartResult<Self> {
        let array = value.as_array().ok_or_else(|| {
            ChartError::InvalidData("input data must be a JSON array of objects".to_string())
        })?;
        let first = match array.first() {
            Some(item) => item.as_object().ok_or_else(|| {
                ChartError::InvalidData("items in array must be objects".to_string())
            })?,
            None => {
                return Err(ChartError::InvalidData(
                    "input data array is empty".to_string(),
                ))
            }
        };

        let headers: Vec<&String> = first
            .keys()
            .filter(|k| !index_fields.contains(&k.as_str()))
            .collect();

        let mut keys = Vec::with_capacity(array.len());
        let mut rows = Vec::with_capacity(array.len());
        for item in array {
            let obj = item.as_object().ok_or_else(|| {
                ChartError::InvalidData("items in array must be objects".to_string())
            })?;
            keys.push(
                index_fields
                    .iter()
                    .map(|f| obj.get(*f).cloned().unwrap_or(Value::Null))
                    .collect(),
            );
            rows.push(
                headers
                    .iter()
                    .map(|h| obj.get(h.as_str()).cloned().unwrap_or(Value::Null))
                    .collect(),
            );
        }

        let columns = headers.into_iter().map(|h| ColumnKey::single(h.as_str())).collect();
        let table = Self::new(columns, rows)?;
        if index_fields.is_empty() {
            return Ok(table);
        }
        let names = index_fields.iter().map(|f| Some(f.to_string())).collect();
        table.with_index(names, keys)
    }

    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    pub fn index_names(&self) -> &[Option<String>] {
        &self.index_names
    }

    pub fn index(&self) -> &[Vec<Value>] {
        &self.index
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of levels in the column header.
    pub fn column_levels(&self) -> usize {
        self.columns.first().map_or(1, ColumnKey::len)
    }

    /// Position of the column with exactly this full key.
    pub fn position(&self, key: &ColumnKey) -> Option<usize> {
        self.columns.iter().position(|c| c == key)
    }

    pub fn column(&self, key: &ColumnKey) -> Option<Vec<&Value>> {
        let idx = self.position(key)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// Moves the index levels into leading columns and leaves a positional
    /// index behind. Row order is preserved.
    pub fn reset_index(&self) -> ChartResult<Table> {
        let levels = self.column_levels();
        let mut flattened: Vec<ColumnKey> = Vec::with_capacity(self.index_names.len());
        for (i, name) in self.index_names.iter().enumerate() {
            let label = match name {
                Some(name) => name.clone(),
                None => self.unnamed_level_label(i),
            };
            let key = ColumnKey::single(label).padded(levels);
            if self.position(&key).is_some() || flattened.contains(&key) {
                return Err(ChartError::DuplicateColumn(key));
            }
            flattened.push(key);
        }

        let mut columns = flattened;
        columns.extend(self.columns.iter().cloned());

        let rows = self
            .index
            .iter()
            .zip(&self.rows)
            .map(|(key, row)| key.iter().chain(row).cloned().collect())
            .collect();

        Self::new(columns, rows)
    }

    fn unnamed_level_label(&self, level: usize) -> String {
        if self.index_names.len() == 1 {
            let key = ColumnKey::single("index").padded(self.column_levels());
            if self.position(&key).is_none() {
                return "index".to_string();
            }
        }
        format!("level_{}", level)
    }
}

fn check_widths(rows: &[Vec<Value>], expected: usize) -> ChartResult<()> {
    match rows.iter().position(|r| r.len() != expected) {
        Some(row) => Err(ChartError::RaggedRow {
            row,
            expected,
            found: rows[row].len(),
        }),
        None => Ok(()),
    }
}
