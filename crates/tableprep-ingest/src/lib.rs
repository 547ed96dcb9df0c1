//! Delimited-file ingestion for the tableprep utilities.
//!
//! - **csv_table**: delimited reading into the shared [`Table`] model
//! - **inference**: priority-ordered column type classification
//! - **guess**: per-file type guessing built on the two above
//!
//! [`Table`]: tableprep_model::Table

pub mod csv_table;
pub mod guess;
pub mod inference;

pub use csv_table::{ReadOptions, read_table};
pub use guess::{TypeMap, guess_column_types, guess_table_types};
pub use inference::{ColumnType, TypeSummary, infer_column_type};
