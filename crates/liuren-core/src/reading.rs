//! The result of a single divination.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::hour::{HourSlot, HourSlotIndex};
use crate::lunar::LunarDate;
use crate::palace::{PalaceDefinition, PalaceIndex, PalacePosition};
use crate::tables::Tables;

/// Table positions derived for a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PalaceIndices {
    /// Double-hour of the casting time.
    pub hour_slot: HourSlotIndex,
    /// 月宫 position.
    pub month: PalaceIndex,
    /// 日宫 position.
    pub day: PalaceIndex,
    /// 时宫 position.
    pub hour: PalaceIndex,
}

impl PalaceIndices {
    /// The palace index for a position.
    pub fn at(&self, position: PalacePosition) -> PalaceIndex {
        match position {
            PalacePosition::Month => self.month,
            PalacePosition::Day => self.day,
            PalacePosition::Hour => self.hour,
        }
    }
}

/// A complete reading: the casting time, its lunar date and double-hour,
/// and the three palaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    /// Gregorian casting time, on the hour.
    pub solar: NaiveDateTime,
    /// Lunar date of the casting day.
    pub lunar: LunarDate,
    /// Short lunar description, e.g. `6月1日(闰)`.
    pub lunar_description: String,
    /// Double-hour of the casting time.
    pub hour_slot: HourSlot,
    /// 月宫
    pub month_palace: PalaceDefinition,
    /// 日宫
    pub day_palace: PalaceDefinition,
    /// 时宫
    pub hour_palace: PalaceDefinition,
    /// Raw table positions behind the above.
    pub indices: PalaceIndices,
}

impl Reading {
    pub(crate) fn assemble(
        solar: NaiveDateTime,
        lunar: LunarDate,
        indices: PalaceIndices,
        tables: &Tables,
    ) -> Self {
        Self {
            solar,
            lunar,
            lunar_description: lunar.to_string(),
            hour_slot: tables.hour_slot(indices.hour_slot).clone(),
            month_palace: tables.palace(indices.month).clone(),
            day_palace: tables.palace(indices.day).clone(),
            hour_palace: tables.palace(indices.hour).clone(),
            indices,
        }
    }

    /// Solar time as `YYYY-MM-DD HH:MM`.
    pub fn solar_display(&self) -> String {
        self.solar.format("%Y-%m-%d %H:%M").to_string()
    }

    /// The palace at a position.
    pub fn palace(&self, position: PalacePosition) -> &PalaceDefinition {
        match position {
            PalacePosition::Month => &self.month_palace,
            PalacePosition::Day => &self.day_palace,
            PalacePosition::Hour => &self.hour_palace,
        }
    }

    /// The three palaces in presentation order.
    pub fn palaces(&self) -> impl Iterator<Item = (PalacePosition, &PalaceDefinition)> {
        PalacePosition::ALL.into_iter().map(|pos| (pos, self.palace(pos)))
    }
}
