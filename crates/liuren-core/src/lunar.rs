//! Lunar dates and the converter interface the calculator depends on.

use serde::{Deserialize, Serialize};

use crate::error::LiurenResult;

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year, numbered by the Gregorian year in which it begins.
    pub year: i32,
    /// Month number, 1-12. A leap month repeats the number of the month it follows.
    pub month: u32,
    /// Day of the month, 1-30.
    pub day: u32,
    /// Whether `month` is the intercalary (闰) month.
    pub is_leap_month: bool,
}

impl LunarDate {
    /// Create a lunar date.
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
        }
    }
}

/// Renders as `3月15日`, with a `(闰)` suffix for leap months.
impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}月{}日", self.month, self.day)?;
        if self.is_leap_month {
            f.write_str("(闰)")?;
        }
        Ok(())
    }
}

/// Converts solar (Gregorian) dates into lunar dates.
pub trait LunarCalendar {
    /// Convert a Gregorian date.
    ///
    /// Fails with [`crate::LiurenError::InvalidInput`] when the date does not
    /// exist or lies outside the calendar's supported range.
    fn solar_to_lunar(&self, year: i32, month: u32, day: u32) -> LiurenResult<LunarDate>;
}

impl<T: LunarCalendar + ?Sized> LunarCalendar for &T {
    fn solar_to_lunar(&self, year: i32, month: u32, day: u32) -> LiurenResult<LunarDate> {
        (**self).solar_to_lunar(year, month, day)
    }
}

impl<T: LunarCalendar + ?Sized> LunarCalendar for Box<T> {
    fn solar_to_lunar(&self, year: i32, month: u32, day: u32) -> LiurenResult<LunarDate> {
        (**self).solar_to_lunar(year, month, day)
    }
}
