//! Conversion from Gregorian dates using the packed year table.

use chrono::{Datelike, NaiveDate};

use liuren_core::{LiurenError, LiurenResult, LunarCalendar, LunarDate};

use crate::data::{EPOCH_DAYS_FROM_CE, FIRST_YEAR, YEAR_INFO};

/// Last supported Gregorian day, 2100-12-31, in days from 0001-01-01.
const LAST_DAYS_FROM_CE: i32 = 767_009;

/// A month of a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    /// Month number, 1-12.
    pub number: u32,
    /// Whether this is the leap month following `number`.
    pub is_leap: bool,
    /// 29 or 30.
    pub days: u32,
}

/// Decoded layout of one lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearInfo {
    year: i32,
    bits: u32,
}

impl YearInfo {
    /// Layout of a lunar year, if it is covered by the table.
    pub fn get(year: i32) -> Option<Self> {
        let idx = usize::try_from(year.checked_sub(FIRST_YEAR)?).ok()?;
        YEAR_INFO.get(idx).map(|&bits| Self { year, bits })
    }

    /// Every covered year in order.
    pub fn all() -> impl Iterator<Item = Self> {
        YEAR_INFO
            .iter()
            .zip(FIRST_YEAR..)
            .map(|(&bits, year)| Self { year, bits })
    }

    /// The lunar year number.
    pub fn year(self) -> i32 {
        self.year
    }

    /// The month that is followed by a leap month, if any.
    pub fn leap_month(self) -> Option<u32> {
        match self.bits & 0xf {
            0 => None,
            m => Some(m),
        }
    }

    /// Length of common month `month` (1-12), or 0 for other numbers.
    pub fn month_days(self, month: u32) -> u32 {
        if !(1..=12).contains(&month) {
            return 0;
        }
        if self.bits & (0x10000 >> month) != 0 { 30 } else { 29 }
    }

    /// Length of the leap month, or 0 when the year has none.
    pub fn leap_month_days(self) -> u32 {
        match self.leap_month() {
            None => 0,
            Some(_) if self.bits & 0x10000 != 0 => 30,
            Some(_) => 29,
        }
    }

    /// Days in the whole lunar year.
    pub fn total_days(self) -> u32 {
        12 * 29 + (self.bits & 0xfff0).count_ones() + self.leap_month_days()
    }

    /// Months in calendar order, the leap month after its common month.
    pub fn months(self) -> impl Iterator<Item = LunarMonth> {
        (1..=12u32).flat_map(move |number| {
            let common = LunarMonth {
                number,
                is_leap: false,
                days: self.month_days(number),
            };
            let leap = (self.leap_month() == Some(number)).then(|| LunarMonth {
                number,
                is_leap: true,
                days: self.leap_month_days(),
            });
            std::iter::once(common).chain(leap)
        })
    }
}

/// Lunar calendar backed by the built-in year table.
///
/// Supports Gregorian dates from 1900-01-31 (lunar 1900-01-01) through
/// 2100-12-31.
#[derive(Debug, Clone, Copy, Default)]
pub struct LunarTable;

impl LunarTable {
    /// Create the converter.
    pub fn new() -> Self {
        Self
    }

    /// Convert a Gregorian date.
    pub fn convert(&self, date: NaiveDate) -> LiurenResult<LunarDate> {
        let days = date.num_days_from_ce();
        if !(EPOCH_DAYS_FROM_CE..=LAST_DAYS_FROM_CE).contains(&days) {
            tracing::debug!(%date, "date outside lunar table");
            return Err(out_of_range(date));
        }

        let mut offset = u32::try_from(days - EPOCH_DAYS_FROM_CE).map_err(|_| out_of_range(date))?;
        for info in YearInfo::all() {
            let total = info.total_days();
            if offset >= total {
                offset -= total;
                continue;
            }
            for month in info.months() {
                if offset < month.days {
                    return Ok(LunarDate::new(
                        info.year(),
                        month.number,
                        offset + 1,
                        month.is_leap,
                    ));
                }
                offset -= month.days;
            }
        }
        Err(out_of_range(date))
    }
}

impl LunarCalendar for LunarTable {
    fn solar_to_lunar(&self, year: i32, month: u32, day: u32) -> LiurenResult<LunarDate> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            LiurenError::invalid(format!("{year}-{month}-{day} is not a calendar date"))
        })?;
        self.convert(date)
    }
}

fn out_of_range(date: NaiveDate) -> LiurenError {
    LiurenError::invalid(format!(
        "{date} is outside the supported range 1900-01-31 to 2100-12-31"
    ))
}
