//! Gregorian to Chinese lunar calendar conversion.
//!
//! [`LunarTable`] implements [`liuren_core::LunarCalendar`] from a packed
//! table of lunar year layouts covering 1900 through 2100.
//!
//! ```
//! use liuren_calendar::LunarTable;
//! use liuren_core::{LunarCalendar, LunarDate};
//!
//! let date = LunarTable.solar_to_lunar(2017, 7, 23).unwrap();
//! assert_eq!(date, LunarDate::new(2017, 6, 1, true));
//! assert_eq!(liuren_calendar::fmt::lunar_date(&date), "丁酉年闰六月初一");
//! ```

pub mod data;
pub mod fmt;
pub mod table;

pub use table::{LunarMonth, LunarTable, YearInfo};
