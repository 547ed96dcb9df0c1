#![deny(unsafe_code)]

use chrono::NaiveDate;

use crate::error::{Result, TableError};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Date(NaiveDate),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_missing()).count()
    }

    /// Fraction of missing values; 0.0 for a column with no rows.
    pub fn null_fraction(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.null_count() as f64 / self.values.len() as f64
        }
    }

    /// True when every cell is either a parsed date or missing.
    pub fn is_date_typed(&self) -> bool {
        self.values
            .iter()
            .all(|value| matches!(value, CellValue::Date(_) | CellValue::Missing))
    }

    /// Non-missing text values, in row order.
    pub fn text_values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().filter_map(CellValue::as_text)
    }
}

/// Ordered collection of equal-length named columns.
///
/// The height is tracked separately from the columns so that a table whose
/// columns have all been dropped still reports its row count.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    columns: Vec<Column>,
    height: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with no columns but a fixed row count.
    pub fn with_height(height: usize) -> Self {
        Self {
            columns: Vec::new(),
            height,
        }
    }

    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut table = Self::new();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    /// Append a column, enforcing the equal-length and unique-name invariants.
    ///
    /// The first column pushed into a fresh table fixes its height.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.columns.iter().any(|existing| existing.name == column.name) {
            return Err(TableError::DuplicateColumn(column.name));
        }
        if self.columns.is_empty() && self.height == 0 {
            self.height = column.len();
        } else if column.len() != self.height {
            return Err(TableError::ColumnLengthMismatch {
                actual: column.len(),
                name: column.name,
                expected: self.height,
            });
        }
        self.columns.push(column);
        Ok(())
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has neither columns nor rows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.height == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    /// New table keeping only the columns accepted by the predicate.
    ///
    /// Relative column order and the row count are preserved; a predicate
    /// rejecting every column leaves a zero-column table of the same height.
    pub fn retain_columns(&self, mut keep: impl FnMut(&Column) -> bool) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .filter(|column| keep(column))
                .cloned()
                .collect(),
            height: self.height,
        }
    }

    /// New table keeping only the rows whose mask entry is true.
    ///
    /// The mask is applied uniformly to every column, preserving row order.
    pub fn retain_rows(&self, mask: &[bool]) -> Result<Self> {
        if mask.len() != self.height {
            return Err(TableError::MaskLengthMismatch {
                expected: self.height,
                actual: mask.len(),
            });
        }
        let kept = mask.iter().filter(|keep| **keep).count();
        let columns = self
            .columns
            .iter()
            .map(|column| {
                let values = column
                    .values
                    .iter()
                    .zip(mask)
                    .filter(|(_, keep)| **keep)
                    .map(|(value, _)| value.clone())
                    .collect();
                Column::new(column.name.clone(), values)
            })
            .collect();
        Ok(Self {
            columns,
            height: kept,
        })
    }
}
