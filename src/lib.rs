pub mod add_days;
pub mod amount;
pub mod calendar;
pub mod date;
#[cfg(feature = "cli")]
pub mod logging;
pub mod options;
pub mod persistence;
pub mod zoned;

pub use add_days::{add_business_days, add_days, sub_days};
pub use amount::DayAmount;
pub use calendar::{Direction, SkipCalendar};
pub use date::{DateValue, ToDate};
pub use options::{AddDaysOptions, ExcludedDates};
pub use persistence::{
    PersistenceError, PersistenceResult, load_excluded_dates_from_csv,
    load_excluded_dates_from_text, load_options_from_json, save_options_to_json,
};
pub use zoned::add_days_in;
