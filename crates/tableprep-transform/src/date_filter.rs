use chrono::{Datelike as _, NaiveDate};
use tracing::{info, warn};

use tableprep_model::{CellValue, Column, Table};

use crate::month_year::{parse_date_lenient, parse_month_year};

/// Options for [`filter_date_range`].
#[derive(Debug, Clone)]
pub struct DateFilterOptions {
    pub date_column: String,
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for DateFilterOptions {
    fn default() -> Self {
        Self {
            date_column: "issue_d".to_string(),
            min_year: 2016,
            max_year: 2019,
        }
    }
}

impl DateFilterOptions {
    pub fn new(date_column: impl Into<String>, min_year: i32, max_year: i32) -> Self {
        Self {
            date_column: date_column.into(),
            min_year,
            max_year,
        }
    }
}

/// Why a filter call returned its input unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PassthroughReason {
    #[error("column '{0}' not found")]
    ColumnMissing(String),
    #[error("column '{0}' cannot be converted to dates")]
    Unparseable(String),
}

/// Result of a date-range filter call.
///
/// Recoverable problems (missing column, unconvertible values) degrade to a
/// reason-tagged passthrough of the input rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    Filtered { table: Table, removed: usize },
    Passthrough { table: Table, reason: PassthroughReason },
}

impl FilterOutcome {
    pub fn table(&self) -> &Table {
        match self {
            Self::Filtered { table, .. } | Self::Passthrough { table, .. } => table,
        }
    }

    pub fn into_table(self) -> Table {
        match self {
            Self::Filtered { table, .. } | Self::Passthrough { table, .. } => table,
        }
    }

    pub fn is_passthrough(&self) -> bool {
        matches!(self, Self::Passthrough { .. })
    }
}

/// Keep only the rows whose date column falls within a closed year interval.
///
/// A text column is converted whole-column first: the month-year shape
/// (`Jan-2016`), then the lenient format ladder. If neither converts every
/// non-missing value the input passes through unchanged. The returned table
/// carries the converted date column; the input is never mutated.
pub fn filter_date_range(table: &Table, options: &DateFilterOptions) -> FilterOutcome {
    let Some(column) = table.column(&options.date_column) else {
        warn!(
            column = %options.date_column,
            "date column not found, returning table unchanged"
        );
        return FilterOutcome::Passthrough {
            table: table.clone(),
            reason: PassthroughReason::ColumnMissing(options.date_column.clone()),
        };
    };

    let Some(dates) = date_cells(column) else {
        warn!(
            column = %options.date_column,
            "cannot convert column to dates, returning table unchanged"
        );
        return FilterOutcome::Passthrough {
            table: table.clone(),
            reason: PassthroughReason::Unparseable(options.date_column.clone()),
        };
    };

    let mask: Vec<bool> = dates
        .iter()
        .map(|cell| {
            matches!(cell, CellValue::Date(date)
                if (options.min_year..=options.max_year).contains(&date.year()))
        })
        .collect();
    let kept = mask.iter().filter(|keep| **keep).count();

    let mut filtered = Table::with_height(kept);
    for source in table.columns() {
        let values = if source.name == options.date_column {
            &dates
        } else {
            &source.values
        };
        let retained: Vec<CellValue> = values
            .iter()
            .zip(&mask)
            .filter(|(_, keep)| **keep)
            .map(|(value, _)| value.clone())
            .collect();
        filtered
            .push_column(Column::new(source.name.clone(), retained))
            .expect("filtered columns share one row count");
    }

    let removed = table.height() - kept;
    if removed > 0 {
        info!(
            removed,
            remaining = kept,
            min_year = options.min_year,
            max_year = options.max_year,
            "dropped rows outside year range"
        );
    }
    FilterOutcome::Filtered {
        table: filtered,
        removed,
    }
}

/// The column's cells as dates: reused when already date-typed, otherwise
/// produced by the whole-column conversion ladder.
fn date_cells(column: &Column) -> Option<Vec<CellValue>> {
    if column.is_date_typed() {
        return Some(column.values.clone());
    }
    convert_with(column, parse_month_year).or_else(|| convert_with(column, parse_date_lenient))
}

/// Apply one parser to every cell; `None` as soon as any non-missing value
/// resists, so a partial conversion never leaks out.
fn convert_with(
    column: &Column,
    parse: impl Fn(&str) -> Option<NaiveDate>,
) -> Option<Vec<CellValue>> {
    let mut converted = Vec::with_capacity(column.len());
    for value in &column.values {
        match value {
            CellValue::Missing => converted.push(CellValue::Missing),
            CellValue::Date(date) => converted.push(CellValue::Date(*date)),
            CellValue::Text(text) => converted.push(CellValue::Date(parse(text)?)),
        }
    }
    Some(converted)
}
