//! Stateless transformations over the shared in-memory table model.
//!
//! - **date_filter**: keep rows whose date column falls in a year interval
//! - **missing**: drop columns carrying too many missing values
//! - **month_year**: the date parsing the filter's conversion ladder uses

pub mod date_filter;
pub mod missing;
pub mod month_year;

pub use date_filter::{DateFilterOptions, FilterOutcome, PassthroughReason, filter_date_range};
pub use missing::{DEFAULT_MAX_NULL_PERCENTAGE, clean_missing_values};
pub use month_year::{parse_date_lenient, parse_month_year};
