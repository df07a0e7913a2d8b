use crate::options::{AddDaysOptions, ExcludedDates};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use std::collections::HashSet;
use std::iter::successors;
use tracing::{debug, trace};

/// Which way a walk moves through the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Zero counts as forward.
    pub fn of(amount: i64) -> Self {
        if amount >= 0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    fn advance(self, from: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Direction::Forward => from.checked_add_days(Days::new(1)),
            Direction::Backward => from.checked_sub_days(Days::new(1)),
        }
    }
}

/// Classifies calendar days as qualifying or skipped for one set of
/// [`AddDaysOptions`].
#[derive(Debug, Clone)]
pub struct SkipCalendar<'a> {
    excluded_dates: &'a ExcludedDates,
    skipped_weekdays: HashSet<Weekday>,
}

impl<'a> SkipCalendar<'a> {
    const WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

    pub fn from_options(options: &'a AddDaysOptions) -> Self {
        let skipped_weekdays = if options.exclude_weekends {
            HashSet::from(Self::WEEKEND)
        } else {
            HashSet::new()
        };

        Self {
            excluded_dates: &options.excluded_dates,
            skipped_weekdays,
        }
    }

    /// Check if a day counts toward a day total
    pub fn is_qualifying(&self, day: NaiveDate) -> bool {
        !self.skipped_weekdays.contains(&day.weekday()) && !self.excluded_dates.contains(day)
    }

    /// Walk one calendar day at a time until `count` qualifying days have
    /// been stepped onto. `from` itself is never evaluated and the time of
    /// day is carried along unchanged.
    ///
    /// Returns `None` only when the walk runs off the representable range.
    pub fn step(
        &self,
        from: NaiveDateTime,
        count: u64,
        direction: Direction,
    ) -> Option<NaiveDateTime> {
        let mut current = from;
        let mut counted = 0u64;
        let mut skipped = 0u64;

        while counted < count {
            current = direction.advance(current)?;
            if self.is_qualifying(current.date()) {
                counted += 1;
            } else {
                skipped += 1;
                trace!(day = %current.date(), "skipping non-qualifying day");
            }
        }

        debug!(
            ?direction,
            count,
            skipped,
            start = %from.date(),
            end = %current.date(),
            "walked qualifying days"
        );
        Some(current)
    }

    /// First qualifying day strictly after `from`
    pub fn next_qualifying(&self, from: NaiveDate) -> Option<NaiveDate> {
        self.step(from.and_time(NaiveTime::MIN), 1, Direction::Forward)
            .map(|dt| dt.date())
    }

    /// First qualifying day strictly before `from`
    pub fn prev_qualifying(&self, from: NaiveDate) -> Option<NaiveDate> {
        self.step(from.and_time(NaiveTime::MIN), 1, Direction::Backward)
            .map(|dt| dt.date())
    }

    /// Get all qualifying days in an inclusive range
    pub fn qualifying_days_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        days_between(start, end)
            .filter(|day| self.is_qualifying(*day))
            .collect()
    }

    /// Count qualifying days in an inclusive range
    pub fn count_qualifying_days(&self, start: NaiveDate, end: NaiveDate) -> u64 {
        days_between(start, end)
            .filter(|day| self.is_qualifying(*day))
            .count() as u64
    }
}

/// Every calendar day from `start` to `end` inclusive; empty when
/// `start > end`.
fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    successors(Some(start), |day| day.succ_opt()).take_while(move |day| *day <= end)
}
