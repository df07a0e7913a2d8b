use crate::amount::DayAmount;
use crate::calendar::{Direction, SkipCalendar};
use crate::date::{DateValue, ToDate};
use crate::options::AddDaysOptions;
use chrono::{Days, NaiveDateTime};

/// Add `amount` days to `date`.
///
/// Without exclusions this is ordinary calendar addition: the day of month
/// moves and the wall-clock time stays put. With weekends or specific days
/// excluded, the result is the day reached after stepping onto `amount`
/// qualifying days, walking backwards for negative amounts.
///
/// Malformed input never panics; it yields [`DateValue::invalid`].
///
/// ```
/// use date_shift::{AddDaysOptions, DateValue, add_days};
///
/// let friday = DateValue::from_ymd(2023, 1, 6);
/// let options = AddDaysOptions::new().with_exclude_weekends(true);
/// assert_eq!(add_days(friday, 1, Some(&options)), DateValue::from_ymd(2023, 1, 9));
/// ```
pub fn add_days<D, A>(date: D, amount: A, options: Option<&AddDaysOptions>) -> DateValue
where
    D: ToDate,
    A: DayAmount,
{
    let Some(start) = date.to_date().datetime() else {
        return DateValue::invalid();
    };
    let Some(amount) = amount.to_day_count() else {
        return DateValue::invalid();
    };

    if amount == 0 {
        return start.into();
    }

    let shifted = match options.filter(|options| options.uses_exclusions()) {
        Some(options) => SkipCalendar::from_options(options).step(
            start,
            amount.unsigned_abs(),
            Direction::of(amount),
        ),
        None => shift_calendar_days(start, amount),
    };

    shifted.map_or(DateValue::invalid(), DateValue::from)
}

/// Add `amount` days counting only Monday to Friday.
pub fn add_business_days<D, A>(date: D, amount: A) -> DateValue
where
    D: ToDate,
    A: DayAmount,
{
    let options = AddDaysOptions::new().with_exclude_weekends(true);
    add_days(date, amount, Some(&options))
}

/// Subtract `amount` days; the mirror image of [`add_days`].
pub fn sub_days<D, A>(date: D, amount: A, options: Option<&AddDaysOptions>) -> DateValue
where
    D: ToDate,
    A: DayAmount,
{
    match amount.to_day_count().and_then(i64::checked_neg) {
        Some(negated) => add_days(date, negated, options),
        None => DateValue::invalid(),
    }
}

fn shift_calendar_days(start: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    let days = Days::new(amount.unsigned_abs());
    if amount >= 0 {
        start.checked_add_days(days)
    } else {
        start.checked_sub_days(days)
    }
}
