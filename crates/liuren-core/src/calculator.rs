//! The divination calculator.
//!
//! Palaces are found by counting around the ring: the month palace starts
//! at 大安 for the first lunar month, the day palace continues from the
//! month palace by the lunar day, and the hour palace continues from the
//! day palace by the double-hour.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::{LiurenError, LiurenResult};
use crate::hour::HourSlotIndex;
use crate::lunar::LunarCalendar;
use crate::palace::PalaceIndex;
use crate::reading::{PalaceIndices, Reading};
use crate::tables::Tables;

/// Double-hour index for a clock hour: `floor((hour + 1) / 2) mod 12`.
pub fn hour_slot_index(hour: u32) -> HourSlotIndex {
    HourSlotIndex::from_clock_hour(hour)
}

/// Month palace: `(lunar_month - 1) mod 6`.
pub fn month_palace_index(lunar_month: u32) -> PalaceIndex {
    PalaceIndex::new(lunar_month.saturating_sub(1))
}

/// Day palace: `(month_palace + lunar_day - 1) mod 6`.
pub fn day_palace_index(month_palace: PalaceIndex, lunar_day: u32) -> PalaceIndex {
    month_palace.advance(lunar_day.saturating_sub(1))
}

/// Hour palace: `(day_palace + hour_slot) mod 6`.
pub fn hour_palace_index(day_palace: PalaceIndex, hour_slot: HourSlotIndex) -> PalaceIndex {
    day_palace.advance(hour_slot.steps())
}

/// Casts readings from a lunar calendar and a set of tables.
#[derive(Debug, Clone)]
pub struct Divination<C> {
    tables: Tables,
    calendar: C,
}

impl<C: LunarCalendar> Divination<C> {
    /// Create a calculator with the built-in tables.
    pub fn new(calendar: C) -> Self {
        Self {
            tables: Tables::builtin(),
            calendar,
        }
    }

    /// Use different tables.
    pub fn with_tables(mut self, tables: Tables) -> Self {
        self.tables = tables;
        self
    }

    /// The tables readings are assembled from.
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// The lunar calendar in use.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Cast a reading for a Gregorian date and clock hour (0-23).
    pub fn compute(&self, year: i32, month: u32, day: u32, hour: u32) -> LiurenResult<Reading> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            LiurenError::invalid(format!("{year}-{month}-{day} is not a calendar date"))
        })?;
        let at = date
            .and_hms_opt(hour, 0, 0)
            .ok_or_else(|| LiurenError::invalid(format!("hour {hour} is not in 0-23")))?;
        self.compute_at(at)
    }

    /// Cast a reading for a timestamp. Only the date and hour are used.
    pub fn compute_at(&self, at: NaiveDateTime) -> LiurenResult<Reading> {
        let lunar = self
            .calendar
            .solar_to_lunar(at.year(), at.month(), at.day())?;

        let hour_slot = hour_slot_index(at.hour());
        let month = month_palace_index(lunar.month);
        let day = day_palace_index(month, lunar.day);
        let hour = hour_palace_index(day, hour_slot);
        let indices = PalaceIndices {
            hour_slot,
            month,
            day,
            hour,
        };

        tracing::debug!(
            solar = %at,
            lunar = %lunar,
            hour_slot = %hour_slot,
            month = %month,
            day = %day,
            hour = %hour,
            "cast reading"
        );

        let solar = at
            .date()
            .and_hms_opt(at.hour(), 0, 0)
            .unwrap_or(at);
        Ok(Reading::assemble(solar, lunar, indices, &self.tables))
    }
}
