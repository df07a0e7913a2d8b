use chrono::NaiveDate;
use date_shift::{AddDaysOptions, ExcludedDates};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn from_values_drops_unparseable_entries() {
    let excluded = ExcludedDates::from_values([
        Some("2023-01-09"),
        None,
        Some("2023-02-30"),
        Some("garbage"),
        Some("2023-01-10T08:00:00"),
    ]);
    assert_eq!(
        excluded.iter().collect::<Vec<_>>(),
        vec![d(2023, 1, 9), d(2023, 1, 10)]
    );
}

#[test]
fn duplicates_collapse_by_calendar_day() {
    let excluded = ExcludedDates::from_values([
        "2023-01-09",
        "2023-01-09T23:59:59",
        "2023-01-09 06:00",
    ]);
    assert_eq!(excluded.len(), 1);
    assert!(excluded.contains(d(2023, 1, 9)));
}

#[test]
fn parse_lines_handles_blank_lines_and_whitespace() {
    let text = "2024-12-25\n\n  2025-01-01  \r\nnot-a-date\n2024-12-24\n";
    let excluded = ExcludedDates::parse_lines(text);
    assert_eq!(
        excluded.iter().collect::<Vec<_>>(),
        vec![d(2024, 12, 24), d(2024, 12, 25), d(2025, 1, 1)]
    );
}

#[test]
fn collects_and_extends_from_days() {
    let mut excluded: ExcludedDates = [d(2025, 1, 1)].into_iter().collect();
    excluded.extend([d(2025, 12, 25), d(2025, 1, 1)]);
    assert_eq!(excluded.len(), 2);
    excluded.clear();
    assert!(excluded.is_empty());
}

#[test]
fn options_serialize_as_plain_json() {
    let options = AddDaysOptions::new()
        .with_exclude_weekends(true)
        .with_excluded_dates(["2024-12-25", "2024-12-24"]);
    let json = serde_json::to_value(&options).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "exclude_weekends": true,
            "excluded_dates": ["2024-12-24", "2024-12-25"]
        })
    );
}

#[test]
fn options_deserialize_with_defaults_and_lenient_dates() {
    let options: AddDaysOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, AddDaysOptions::default());

    let options: AddDaysOptions = serde_json::from_str(
        r#"{"excluded_dates": ["2024-12-25", null, "whenever", "2024-12-25T10:00:00"]}"#,
    )
    .unwrap();
    assert!(!options.exclude_weekends);
    assert_eq!(
        options.excluded_dates.iter().collect::<Vec<_>>(),
        vec![d(2024, 12, 25)]
    );
}

#[test]
fn options_deserialize_drops_entries_of_any_other_shape() {
    let options: AddDaysOptions = serde_json::from_str(
        r#"{"exclude_weekends": true, "excluded_dates": ["2024-12-25", true, 1.5, {}, [], null, "2024-12-26"]}"#,
    )
    .unwrap();
    assert!(options.exclude_weekends);
    assert_eq!(
        options.excluded_dates.iter().collect::<Vec<_>>(),
        vec![d(2024, 12, 25), d(2024, 12, 26)]
    );
}

#[test]
fn options_deserialize_null_excluded_dates_as_empty() {
    let options: AddDaysOptions =
        serde_json::from_str(r#"{"exclude_weekends": true, "excluded_dates": null}"#).unwrap();
    assert!(options.exclude_weekends);
    assert!(options.excluded_dates.is_empty());
}
