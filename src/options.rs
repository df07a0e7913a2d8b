use crate::date::{DateValue, ToDate};
use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use tracing::debug;

/// Calendar days that never count toward a day total.
///
/// Entries are compared by calendar-day identity, so the time of day of
/// whatever was supplied is dropped on the way in. Duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludedDates {
    days: BTreeSet<NaiveDate>,
}

impl ExcludedDates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps every value that resolves to a calendar day and silently
    /// drops the rest.
    pub fn from_values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToDate,
    {
        let mut dropped = 0usize;
        let days = values
            .into_iter()
            .filter_map(|value| {
                let day = value.to_date().date();
                if day.is_none() {
                    dropped += 1;
                }
                day
            })
            .collect();
        if dropped > 0 {
            debug!(dropped, "ignored excluded dates that are not calendar days");
        }
        Self { days }
    }

    /// Newline-delimited list, one date per line. Blank lines are skipped.
    pub fn parse_lines(text: &str) -> Self {
        Self::from_values(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    /// Returns `false` when the value is not a calendar day or was already
    /// present.
    pub fn insert(&mut self, value: impl ToDate) -> bool {
        match value.to_date().date() {
            Some(day) => self.days.insert(day),
            None => false,
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }

    /// Days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }
}

impl FromIterator<NaiveDate> for ExcludedDates {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

impl Extend<NaiveDate> for ExcludedDates {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.days.extend(iter);
    }
}

impl Serialize for ExcludedDates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.days.iter())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExcludedDate {
    Text(String),
    Timestamp(i64),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for ExcludedDates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Vec<RawExcludedDate>>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self::from_values(raw.into_iter().map(|entry| match entry {
            RawExcludedDate::Text(text) => text.to_date(),
            RawExcludedDate::Timestamp(millis) => millis.to_date(),
            RawExcludedDate::Other(_) => DateValue::invalid(),
        })))
    }
}

/// Switches for business-day style arithmetic. Both default to off, in
/// which case shifting is plain calendar addition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDaysOptions {
    #[serde(default)]
    pub exclude_weekends: bool,
    #[serde(default)]
    pub excluded_dates: ExcludedDates,
}

impl AddDaysOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exclude_weekends(mut self, exclude: bool) -> Self {
        self.exclude_weekends = exclude;
        self
    }

    /// Replaces the excluded days; invalid values are dropped.
    pub fn with_excluded_dates<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToDate,
    {
        self.excluded_dates = ExcludedDates::from_values(values);
        self
    }

    pub fn with_excluded_date(mut self, value: impl ToDate) -> Self {
        self.excluded_dates.insert(value);
        self
    }

    /// True when shifting has to walk day by day.
    pub fn uses_exclusions(&self) -> bool {
        self.exclude_weekends || !self.excluded_dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn insert_reports_duplicates_and_garbage() {
        let mut excluded = ExcludedDates::new();
        assert!(excluded.insert("2023-01-09"));
        assert!(!excluded.insert("2023-01-09T15:00:00"));
        assert!(!excluded.insert("nope"));
        assert_eq!(excluded.iter().collect::<Vec<_>>(), vec![d(2023, 1, 9)]);
    }

    #[test]
    fn default_options_do_not_walk() {
        assert!(!AddDaysOptions::default().uses_exclusions());
        assert!(AddDaysOptions::new().with_exclude_weekends(true).uses_exclusions());
        assert!(
            AddDaysOptions::new()
                .with_excluded_date(d(2023, 1, 9))
                .uses_exclusions()
        );
        assert!(
            !AddDaysOptions::new()
                .with_excluded_dates(["garbage"])
                .uses_exclusions()
        );
    }
}
