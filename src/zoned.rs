use crate::add_days::add_days;
use crate::amount::DayAmount;
use crate::options::AddDaysOptions;
use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};

/// [`add_days`] for a zoned instant.
///
/// The wall clock is shifted in the instant's own zone and then resolved
/// back into it, so 09:00 stays 09:00 across a daylight-saving change even
/// though the elapsed time is 23 or 25 hours. An amount of zero hands back
/// the input instant untouched.
///
/// An ambiguous wall clock keeps the input's offset when it is one of the
/// candidates and takes the earlier instant otherwise. A wall clock that
/// falls into a gap is read with the offset in force before the gap, which
/// moves it forward by exactly the size of the gap.
pub fn add_days_in<Tz, A>(
    date: &DateTime<Tz>,
    amount: A,
    options: Option<&AddDaysOptions>,
) -> Option<DateTime<Tz>>
where
    Tz: TimeZone,
    A: DayAmount,
{
    let amount = amount.to_day_count()?;
    if amount == 0 {
        return Some(date.clone());
    }

    let shifted = add_days(date.naive_local(), amount, options).datetime()?;
    resolve_local(date, shifted)
}

fn resolve_local<Tz: TimeZone>(
    reference: &DateTime<Tz>,
    wall_clock: NaiveDateTime,
) -> Option<DateTime<Tz>> {
    let zone = reference.timezone();
    match zone.from_local_datetime(&wall_clock) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, latest) => {
            let offset = reference.offset().fix();
            if latest.offset().fix() == offset {
                Some(latest)
            } else {
                Some(earliest)
            }
        }
        LocalResult::None => {
            // Transitions are at least a day apart, so the offset a day
            // earlier is the one in force just before the gap.
            let before_gap = wall_clock.checked_sub_signed(TimeDelta::days(1))?;
            let offset = zone.from_local_datetime(&before_gap).earliest()?.offset().fix();
            let utc = wall_clock
                .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
            Some(zone.from_utc_datetime(&utc))
        }
    }
}
