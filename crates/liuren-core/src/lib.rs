//! Core calculator for Xiao Liu Ren (小六壬) divination.
//!
//! A reading is cast from a Gregorian date and clock hour. The date is
//! converted to the lunar calendar through a [`LunarCalendar`], and three
//! palaces are counted around a fixed ring of six: one for the lunar month,
//! one for the lunar day, and one for the double-hour.
//!
//! ```
//! use liuren_core::{Divination, LiurenResult, LunarCalendar, LunarDate};
//!
//! struct NewYear;
//!
//! impl LunarCalendar for NewYear {
//!     fn solar_to_lunar(&self, year: i32, _: u32, _: u32) -> LiurenResult<LunarDate> {
//!         Ok(LunarDate::new(year, 1, 1, false))
//!     }
//! }
//!
//! let reading = Divination::new(NewYear).compute(2024, 2, 10, 23).unwrap();
//! assert_eq!(reading.month_palace.name, "大安");
//! assert_eq!(reading.hour_slot.name, "子");
//! ```

/// Palace and hour index arithmetic and the [`Divination`] calculator.
pub mod calculator;
/// Error types used throughout the crate.
pub mod error;
/// The twelve double-hours.
pub mod hour;
/// Lunar dates and the converter interface.
pub mod lunar;
/// The six palaces.
pub mod palace;
/// The reading produced by a divination.
pub mod reading;
/// The lookup tables held by the calculator.
pub mod tables;

/// Re-export the calculator.
pub use calculator::Divination;
/// Re-export error types.
pub use error::{LiurenError, LiurenResult};
/// Re-export double-hour types.
pub use hour::{HourSlot, HourSlotIndex};
/// Re-export lunar calendar types.
pub use lunar::{LunarCalendar, LunarDate};
/// Re-export palace types.
pub use palace::{Element, Fortune, PalaceDefinition, PalaceIndex, PalacePosition};
/// Re-export reading types.
pub use reading::{PalaceIndices, Reading};
/// Re-export tables.
pub use tables::Tables;
