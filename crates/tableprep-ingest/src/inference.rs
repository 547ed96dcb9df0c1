//! Column type inference over delimited-file samples.
//!
//! Classification is a priority-ordered rule chain evaluated top to bottom:
//!
//! 1. every value carries a `YYYY-MM-DD HH:MM:SS` timestamp prefix → `datetime64`
//! 2. every value carries a `YYYY-MM-DD` date prefix → `date`
//! 3. otherwise a generic primitive inference over the sample
//!
//! Both date patterns are anchored at the start only, so trailing content is
//! ignored. A value that merely starts like a date (an account number such as
//! `2023-45-9999x`) therefore classifies as `date`; that is accepted behavior
//! inherited from the prefix match.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Timestamp prefix `YYYY-MM-DD HH:MM:SS`.
static DATETIME_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}").expect("invalid datetime regex")
});

/// Date prefix `YYYY-MM-DD`.
static DATE_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("invalid date regex"));

/// Semantic type inferred for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Datetime64,
    Date,
    Integer,
    Floating,
    Boolean,
    #[serde(rename = "string")]
    Text,
    Mixed,
    Empty,
}

impl ColumnType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Datetime64 => "datetime64",
            Self::Date => "date",
            Self::Integer => "integer",
            Self::Floating => "floating",
            Self::Boolean => "boolean",
            Self::Text => "string",
            Self::Mixed => "mixed",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a column's non-missing values.
///
/// An empty sample is `Empty`; the date rules require every value to match
/// before the generic primitive inference gets a say.
pub fn infer_column_type(values: &[&str]) -> ColumnType {
    if values.is_empty() {
        return ColumnType::Empty;
    }
    if values.iter().all(|value| DATETIME_PREFIX_REGEX.is_match(value)) {
        return ColumnType::Datetime64;
    }
    if values.iter().all(|value| DATE_PREFIX_REGEX.is_match(value)) {
        return ColumnType::Date;
    }
    infer_primitive_type(values)
}

/// Generic inference for samples that are not date-shaped.
///
/// An integer/float mix promotes to `Floating`; any other cross-class mix is
/// `Mixed`.
fn infer_primitive_type(values: &[&str]) -> ColumnType {
    let mut booleans = 0usize;
    let mut integers = 0usize;
    let mut floats = 0usize;
    let mut texts = 0usize;
    for value in values {
        if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
            booleans += 1;
        } else if value.parse::<i64>().is_ok() {
            integers += 1;
        } else if value.parse::<f64>().is_ok() {
            floats += 1;
        } else {
            texts += 1;
        }
    }

    let total = values.len();
    if booleans == total {
        ColumnType::Boolean
    } else if integers == total {
        ColumnType::Integer
    } else if integers + floats == total {
        ColumnType::Floating
    } else if texts == total {
        ColumnType::Text
    } else {
        ColumnType::Mixed
    }
}

/// Per-type column counts for a guessed file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TypeSummary {
    pub datetime: usize,
    pub date: usize,
    pub integer: usize,
    pub floating: usize,
    pub boolean: usize,
    pub text: usize,
    pub mixed: usize,
    pub empty: usize,
}

impl TypeSummary {
    pub fn from_types<'a>(types: impl IntoIterator<Item = &'a ColumnType>) -> Self {
        let mut summary = Self::default();
        for inferred in types {
            match inferred {
                ColumnType::Datetime64 => summary.datetime += 1,
                ColumnType::Date => summary.date += 1,
                ColumnType::Integer => summary.integer += 1,
                ColumnType::Floating => summary.floating += 1,
                ColumnType::Boolean => summary.boolean += 1,
                ColumnType::Text => summary.text += 1,
                ColumnType::Mixed => summary.mixed += 1,
                ColumnType::Empty => summary.empty += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.datetime
            + self.date
            + self.integer
            + self.floating
            + self.boolean
            + self.text
            + self.mixed
            + self.empty
    }
}
