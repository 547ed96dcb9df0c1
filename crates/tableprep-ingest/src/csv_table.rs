use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;

use tableprep_model::{CellValue, Column, Table};

/// Cell values treated as missing, matching the defaults of the loader the
/// rest of the pipeline was built against.
const MISSING_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

#[derive(Debug, Clone)]
pub struct ReadOptions {
    pub delimiter: u8,
    pub has_headers: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }
}

impl ReadOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn without_headers(mut self) -> Self {
        self.has_headers = false;
        self
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if MISSING_MARKERS.contains(&trimmed) {
        CellValue::Missing
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

/// Disambiguate repeated header names with a numeric suffix so the table's
/// unique-name invariant holds.
fn unique_headers(raw: Vec<String>) -> Vec<String> {
    let mut headers: Vec<String> = Vec::with_capacity(raw.len());
    for name in raw {
        if !headers.contains(&name) {
            headers.push(name);
            continue;
        }
        let mut suffix = 1usize;
        loop {
            let candidate = format!("{name}_{suffix}");
            if !headers.contains(&candidate) {
                headers.push(candidate);
                break;
            }
            suffix += 1;
        }
    }
    headers
}

/// Read a delimited file into a [`Table`].
///
/// Blank lines are skipped, short records are padded with missing cells, and
/// long records are truncated to the header width. A file with no records at
/// all is an error, since there is nothing to name columns from.
pub fn read_table(path: &Path, options: &ReadOptions) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_path(path)
        .with_context(|| format!("read table: {}", path.display()))?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        bail!("no columns to parse in {}", path.display());
    }

    let (headers, data_start) = if options.has_headers {
        let names = raw_rows[0].iter().map(|raw| normalize_header(raw)).collect();
        (unique_headers(names), 1)
    } else {
        let width = raw_rows[0].len();
        ((0..width).map(|idx| format!("column_{idx}")).collect(), 0)
    };

    let mut column_values: Vec<Vec<CellValue>> =
        vec![Vec::with_capacity(raw_rows.len()); headers.len()];
    for record in raw_rows.iter().skip(data_start) {
        for (idx, values) in column_values.iter_mut().enumerate() {
            let raw = record.get(idx).map(String::as_str).unwrap_or("");
            values.push(parse_cell(raw));
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(column_values)
        .map(|(name, values)| Column::new(name, values))
        .collect();
    let table = Table::from_columns(columns)
        .with_context(|| format!("assemble table from {}", path.display()))?;
    Ok(table)
}
