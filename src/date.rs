use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};
use std::fmt;

/// Formats tried, in order, for calendar strings that carry a time of day.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A wall-clock date and time, or the invalid-date sentinel.
///
/// Values are `Copy`: shifting a date always hands back a new value and
/// never touches the one the caller holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateValue(Option<NaiveDateTime>);

impl DateValue {
    /// The sentinel returned in place of an error.
    pub const fn invalid() -> Self {
        Self(None)
    }

    /// Midnight on the given day; invalid if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        NaiveDate::from_ymd_opt(year, month, day).to_date()
    }

    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, sec))
            .to_date()
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    pub fn datetime(&self) -> Option<NaiveDateTime> {
        self.0
    }

    /// Calendar day, ignoring the time of day.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0.map(|dt| dt.date())
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.0.map(|dt| dt.weekday())
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(value: NaiveDateTime) -> Self {
        Self(Some(value))
    }
}

impl From<NaiveDate> for DateValue {
    fn from(value: NaiveDate) -> Self {
        Self(Some(value.and_time(NaiveTime::MIN)))
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "Invalid Date"),
            Some(dt) if dt.time() == NaiveTime::MIN => write!(f, "{}", dt.date()),
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

/// Normalizes any accepted date representation into a [`DateValue`].
///
/// Conversions never fail loudly: anything that does not describe a real
/// date comes back as [`DateValue::invalid`].
pub trait ToDate {
    fn to_date(self) -> DateValue;
}

impl ToDate for DateValue {
    fn to_date(self) -> DateValue {
        self
    }
}

impl ToDate for &DateValue {
    fn to_date(self) -> DateValue {
        *self
    }
}

impl ToDate for NaiveDate {
    fn to_date(self) -> DateValue {
        self.into()
    }
}

impl ToDate for &NaiveDate {
    fn to_date(self) -> DateValue {
        (*self).into()
    }
}

impl ToDate for NaiveDateTime {
    fn to_date(self) -> DateValue {
        self.into()
    }
}

impl ToDate for &NaiveDateTime {
    fn to_date(self) -> DateValue {
        (*self).into()
    }
}

/// Zoned instants keep the wall clock of their own zone.
impl<Tz: TimeZone> ToDate for DateTime<Tz> {
    fn to_date(self) -> DateValue {
        self.naive_local().into()
    }
}

impl<Tz: TimeZone> ToDate for &DateTime<Tz> {
    fn to_date(self) -> DateValue {
        self.naive_local().into()
    }
}

/// Milliseconds since the Unix epoch, read in the process-local zone.
impl ToDate for i64 {
    fn to_date(self) -> DateValue {
        Local
            .timestamp_millis_opt(self)
            .single()
            .map(|dt| dt.naive_local())
            .to_date()
    }
}

impl ToDate for &str {
    fn to_date(self) -> DateValue {
        parse_date_str(self)
    }
}

impl ToDate for String {
    fn to_date(self) -> DateValue {
        parse_date_str(&self)
    }
}

impl ToDate for &String {
    fn to_date(self) -> DateValue {
        parse_date_str(self)
    }
}

impl<T: ToDate> ToDate for Option<T> {
    fn to_date(self) -> DateValue {
        self.map_or(DateValue::invalid(), ToDate::to_date)
    }
}

fn parse_date_str(input: &str) -> DateValue {
    let input = input.trim();
    if input.is_empty() {
        return DateValue::invalid();
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.into();
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return dt.into();
        }
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.naive_local().into())
        .unwrap_or(DateValue::invalid())
}
