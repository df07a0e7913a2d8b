use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use date_shift::calendar::{Direction, SkipCalendar};
use date_shift::options::AddDaysOptions;

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn weekends() -> AddDaysOptions {
    AddDaysOptions::new().with_exclude_weekends(true)
}

#[test]
fn weekend_calendar_skips_saturday_and_sunday() {
    let options = weekends();
    let cal = SkipCalendar::from_options(&options);
    // 2025-01-04 is a Saturday, 2025-01-05 is a Sunday
    assert!(!cal.is_qualifying(d(2025, 1, 4)));
    assert!(!cal.is_qualifying(d(2025, 1, 5)));
    assert!(cal.is_qualifying(d(2025, 1, 6)));
}

#[test]
fn default_calendar_counts_every_day() {
    let options = AddDaysOptions::default();
    let cal = SkipCalendar::from_options(&options);
    assert!(cal.is_qualifying(d(2025, 1, 4)));
    assert_eq!(cal.count_qualifying_days(d(2025, 1, 1), d(2025, 1, 31)), 31);
}

#[test]
fn excluded_days_block_any_weekday() {
    let options = AddDaysOptions::new().with_excluded_dates([d(2025, 1, 4), d(2025, 2, 4)]);
    let cal = SkipCalendar::from_options(&options);
    assert!(!cal.is_qualifying(d(2025, 1, 4)));
    assert!(!cal.is_qualifying(d(2025, 2, 4)));
    assert!(cal.is_qualifying(d(2025, 1, 5)));
}

#[test]
fn next_and_prev_qualifying_skip_weekend() {
    let options = weekends();
    let cal = SkipCalendar::from_options(&options);
    let fri = d(2025, 1, 3);
    let next = cal.next_qualifying(fri).unwrap();
    assert_eq!(next.weekday(), Weekday::Mon);
    assert_eq!(next, d(2025, 1, 6));
    assert_eq!(cal.prev_qualifying(next), Some(fri));
}

#[test]
fn step_counts_only_qualifying_days() {
    let options = weekends();
    let cal = SkipCalendar::from_options(&options);
    let mon = d(2025, 1, 6).and_time(NaiveTime::MIN);
    let four_ahead = cal.step(mon, 4, Direction::Forward).unwrap();
    // 4 working days ahead of Monday should land on Friday
    assert_eq!(four_ahead.weekday(), Weekday::Fri);
    let back = cal.step(four_ahead, 4, Direction::Backward).unwrap();
    assert_eq!(back, mon);
}

#[test]
fn step_of_zero_stays_put() {
    let options = weekends();
    let cal = SkipCalendar::from_options(&options);
    // Saturday is returned as-is; the starting day is never evaluated.
    let sat = d(2025, 1, 4).and_hms_opt(10, 0, 0).unwrap();
    assert_eq!(cal.step(sat, 0, Direction::Forward), Some(sat));
}

#[test]
fn step_off_the_end_of_the_calendar_is_none() {
    let options = AddDaysOptions::default();
    let cal = SkipCalendar::from_options(&options);
    let last = NaiveDate::MAX.and_time(NaiveTime::MIN);
    assert_eq!(cal.step(last, 1, Direction::Forward), None);
}

#[test]
fn qualifying_days_in_range_and_count_match() {
    let options = weekends().with_excluded_dates([d(2025, 1, 8)]);
    let cal = SkipCalendar::from_options(&options);
    let start = d(2025, 1, 6); // Mon
    let end = d(2025, 1, 12); // Sun
    let days = cal.qualifying_days_in_range(start, end);
    assert_eq!(days.len() as u64, cal.count_qualifying_days(start, end));
    assert_eq!(
        days,
        vec![d(2025, 1, 6), d(2025, 1, 7), d(2025, 1, 9), d(2025, 1, 10)]
    );
    assert!(cal.qualifying_days_in_range(end, start).is_empty());
}

#[test]
fn direction_follows_sign() {
    assert_eq!(Direction::of(3), Direction::Forward);
    assert_eq!(Direction::of(0), Direction::Forward);
    assert_eq!(Direction::of(-1), Direction::Backward);
}

#[test]
fn range_helpers_stop_at_the_end_of_the_calendar() {
    let options = AddDaysOptions::default();
    let cal = SkipCalendar::from_options(&options);
    let before_last = NaiveDate::MAX.pred_opt().unwrap();
    assert_eq!(cal.count_qualifying_days(before_last, NaiveDate::MAX), 2);
    assert_eq!(cal.count_qualifying_days(d(2025, 1, 10), d(2025, 1, 9)), 0);
}
