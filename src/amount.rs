/// Coerces a caller-supplied amount into a whole number of days.
///
/// `None` marks a non-numeric or non-finite amount. Fractional amounts are
/// truncated toward zero.
pub trait DayAmount {
    fn to_day_count(self) -> Option<i64>;
}

macro_rules! exact_day_amount {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DayAmount for $ty {
                fn to_day_count(self) -> Option<i64> {
                    i64::try_from(self).ok()
                }
            }
        )*
    };
}

exact_day_amount!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl DayAmount for f64 {
    fn to_day_count(self) -> Option<i64> {
        if !self.is_finite() {
            return None;
        }
        let truncated = self.trunc();
        // i64::MAX is not representable as f64; the cast rounds it up to 2^63.
        if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
            return None;
        }
        Some(truncated as i64)
    }
}

impl DayAmount for f32 {
    fn to_day_count(self) -> Option<i64> {
        f64::from(self).to_day_count()
    }
}

impl DayAmount for &str {
    fn to_day_count(self) -> Option<i64> {
        let input = self.trim();
        input
            .parse::<i64>()
            .ok()
            .or_else(|| input.parse::<f64>().ok().and_then(f64::to_day_count))
    }
}

impl<T: DayAmount> DayAmount for Option<T> {
    fn to_day_count(self) -> Option<i64> {
        self.and_then(DayAmount::to_day_count)
    }
}
