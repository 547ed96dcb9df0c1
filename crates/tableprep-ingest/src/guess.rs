use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use tableprep_model::Table;

use crate::csv_table::{ReadOptions, read_table};
use crate::inference::{ColumnType, TypeSummary, infer_column_type};

/// Inferred type per column name.
pub type TypeMap = BTreeMap<String, ColumnType>;

/// Infer a semantic type for every column of a delimited file.
///
/// A file that cannot be opened, read, or parsed surfaces as `Err` with the
/// offending path in the message; this function never panics.
pub fn guess_column_types(path: &Path, options: &ReadOptions) -> Result<TypeMap> {
    let table = read_table(path, options)?;
    let types = guess_table_types(&table);
    tracing::debug!(
        path = %path.display(),
        columns = types.len(),
        "guessed column types"
    );
    Ok(types)
}

/// Infer types for an already-loaded table.
pub fn guess_table_types(table: &Table) -> TypeMap {
    let mut types = TypeMap::new();
    for column in table.columns() {
        let sample: Vec<&str> = column.text_values().collect();
        types.insert(column.name.clone(), infer_column_type(&sample));
    }
    let summary = TypeSummary::from_types(types.values());
    tracing::debug!(?summary, "inference summary");
    types
}
