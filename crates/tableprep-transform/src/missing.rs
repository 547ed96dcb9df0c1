use tracing::{info, warn};

use tableprep_model::Table;

/// Default ceiling on a column's share of missing values, in percent.
pub const DEFAULT_MAX_NULL_PERCENTAGE: f64 = 30.0;

/// Drop every column whose missing-value percentage exceeds the ceiling.
///
/// The boundary is inclusive: a column sitting exactly at
/// `max_null_percentage` survives. Column order and row count are preserved;
/// a table with no rows has no nulls, so all of its columns survive. Dropping
/// every column leaves a zero-column table of the input's height.
pub fn clean_missing_values(table: &Table, max_null_percentage: f64) -> Table {
    if table.width() == 0 {
        warn!("input table has no columns");
        return table.clone();
    }

    let original_columns = table.width();
    let cleaned =
        table.retain_columns(|column| column.null_fraction() * 100.0 <= max_null_percentage);

    let removed = original_columns - cleaned.width();
    if removed > 0 {
        info!(
            removed,
            remaining = cleaned.width(),
            max_null_percentage,
            "dropped columns over the missing-value ceiling"
        );
    } else {
        info!(
            columns = cleaned.width(),
            max_null_percentage, "all columns within the missing-value ceiling"
        );
    }
    cleaned
}
