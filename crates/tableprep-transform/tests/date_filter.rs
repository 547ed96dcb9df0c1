//! Tests for the date-range row filter.

use chrono::NaiveDate;
use tableprep_model::{CellValue, Column, Table};
use tableprep_transform::{DateFilterOptions, FilterOutcome, PassthroughReason, filter_date_range};

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn ymd(year: i32, month: u32, day: u32) -> CellValue {
    CellValue::Date(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"))
}

fn loan_table(dates: &[&str]) -> Table {
    let amounts: Vec<CellValue> = (0..dates.len())
        .map(|idx| text(&format!("{}", 1000 * (idx + 1))))
        .collect();
    Table::from_columns(vec![
        Column::new("issue_d", dates.iter().map(|d| text(d)).collect()),
        Column::new("loan_amnt", amounts),
    ])
    .expect("build table")
}

#[test]
fn keeps_only_rows_inside_the_year_range() {
    let table = loan_table(&["Dec-2015", "Jan-2016", "Jun-2017", "Dec-2019", "Jan-2020"]);

    let outcome = filter_date_range(&table, &DateFilterOptions::default());
    let FilterOutcome::Filtered { table: filtered, removed } = outcome else {
        panic!("expected a filtered outcome");
    };

    assert_eq!(removed, 2);
    assert_eq!(filtered.height(), 3);
    assert_eq!(
        filtered.column("issue_d").expect("issue_d").values,
        vec![ymd(2016, 1, 1), ymd(2017, 6, 1), ymd(2019, 12, 1)]
    );
    // The companion column is filtered by the same mask, in order.
    assert_eq!(
        filtered.column("loan_amnt").expect("loan_amnt").values,
        vec![text("2000"), text("3000"), text("4000")]
    );
}

#[test]
fn year_bounds_are_inclusive() {
    let table = loan_table(&["2015-12-31", "2016-01-01", "2019-12-31", "2020-01-01"]);

    let filtered = filter_date_range(&table, &DateFilterOptions::default()).into_table();
    assert_eq!(filtered.height(), 2);
    assert_eq!(
        filtered.column("issue_d").expect("issue_d").values,
        vec![ymd(2016, 1, 1), ymd(2019, 12, 31)]
    );
}

#[test]
fn custom_column_and_bounds() {
    let table = Table::from_columns(vec![Column::new(
        "closed_d",
        vec![text("Jan-2010"), text("Jan-2012"), text("Jan-2014")],
    )])
    .expect("build table");

    let options = DateFilterOptions::new("closed_d", 2011, 2013);
    let filtered = filter_date_range(&table, &options).into_table();
    assert_eq!(filtered.height(), 1);
    assert_eq!(
        filtered.column("closed_d").expect("closed_d").values,
        vec![ymd(2012, 1, 1)]
    );
}

#[test]
fn missing_column_passes_through_unchanged() {
    let table = Table::from_columns(vec![Column::new("amount", vec![text("1"), text("2")])])
        .expect("build table");

    let outcome = filter_date_range(&table, &DateFilterOptions::default());
    let FilterOutcome::Passthrough { table: unchanged, reason } = outcome else {
        panic!("expected a passthrough outcome");
    };
    assert_eq!(reason, PassthroughReason::ColumnMissing("issue_d".to_string()));
    assert_eq!(unchanged, table);
}

#[test]
fn unparseable_column_passes_through_unchanged() {
    let table = loan_table(&["Jan-2016", "definitely not a date", "Jun-2017"]);

    let outcome = filter_date_range(&table, &DateFilterOptions::default());
    let FilterOutcome::Passthrough { table: unchanged, reason } = outcome else {
        panic!("expected a passthrough outcome");
    };
    assert_eq!(reason, PassthroughReason::Unparseable("issue_d".to_string()));
    assert_eq!(unchanged, table);
    assert!(
        unchanged
            .column("issue_d")
            .expect("issue_d")
            .values
            .iter()
            .all(|cell| cell.as_text().is_some()),
        "passthrough must not leak a partial conversion"
    );
}

#[test]
fn falls_back_to_lenient_parsing_for_iso_dates() {
    let table = loan_table(&["2016-03-15", "2021-07-01"]);

    let filtered = filter_date_range(&table, &DateFilterOptions::default()).into_table();
    assert_eq!(filtered.height(), 1);
    assert_eq!(
        filtered.column("issue_d").expect("issue_d").values,
        vec![ymd(2016, 3, 15)]
    );
}

#[test]
fn missing_date_cells_are_never_retained() {
    let table = Table::from_columns(vec![Column::new(
        "issue_d",
        vec![text("Jan-2016"), CellValue::Missing, text("Jun-2017")],
    )])
    .expect("build table");

    let filtered = filter_date_range(&table, &DateFilterOptions::default()).into_table();
    assert_eq!(filtered.height(), 2);
}

#[test]
fn already_date_typed_column_skips_conversion() {
    let first = loan_table(&["Jan-2016", "Jun-2017", "Jan-2020"]);
    let once = filter_date_range(&first, &DateFilterOptions::default()).into_table();
    assert!(once.column("issue_d").expect("issue_d").is_date_typed());

    let twice = filter_date_range(&once, &DateFilterOptions::default()).into_table();
    assert_eq!(twice, once);
}

#[test]
fn empty_result_keeps_all_columns() {
    let table = loan_table(&["Jan-2000", "Feb-2001"]);

    let outcome = filter_date_range(&table, &DateFilterOptions::default());
    let FilterOutcome::Filtered { table: filtered, removed } = outcome else {
        panic!("expected a filtered outcome");
    };
    assert_eq!(removed, 2);
    assert_eq!(filtered.height(), 0);
    assert_eq!(filtered.width(), 2);
}

#[test]
fn input_table_is_not_mutated() {
    let table = loan_table(&["Jan-2016", "Jan-2020"]);
    let snapshot = table.clone();

    let _ = filter_date_range(&table, &DateFilterOptions::default());
    assert_eq!(table, snapshot);
}
