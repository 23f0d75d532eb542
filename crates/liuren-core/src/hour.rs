//! The twelve double-hours (时辰).

use serde::{Deserialize, Serialize};

/// Number of double-hours in a day.
pub const HOUR_SLOT_COUNT: usize = 12;

/// One row of the double-hour table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSlot {
    /// Earthly-branch name, e.g. `子`.
    pub name: String,
    /// Clock range shown to the user, e.g. `23:00-01:00`.
    pub display_range: String,
}

impl HourSlot {
    /// Create a double-hour row.
    pub fn new(name: impl Into<String>, display_range: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_range: display_range.into(),
        }
    }
}

impl std::fmt::Display for HourSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}时 ({})", self.name, self.display_range)
    }
}

/// The built-in double-hour table, starting at 子.
pub fn builtin_hour_slots() -> [HourSlot; HOUR_SLOT_COUNT] {
    [
        HourSlot::new("子", "23:00-01:00"),
        HourSlot::new("丑", "01:00-03:00"),
        HourSlot::new("寅", "03:00-05:00"),
        HourSlot::new("卯", "05:00-07:00"),
        HourSlot::new("辰", "07:00-09:00"),
        HourSlot::new("巳", "09:00-11:00"),
        HourSlot::new("午", "11:00-13:00"),
        HourSlot::new("未", "13:00-15:00"),
        HourSlot::new("申", "15:00-17:00"),
        HourSlot::new("酉", "17:00-19:00"),
        HourSlot::new("戌", "19:00-21:00"),
        HourSlot::new("亥", "21:00-23:00"),
    ]
}

/// A position in the double-hour table, always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HourSlotIndex(u8);

impl HourSlotIndex {
    /// Map a clock hour onto its double-hour.
    ///
    /// Boundaries fall on odd hours, so 23:00 and 00:00 both land in 子.
    pub fn from_clock_hour(hour: u32) -> Self {
        Self((hour.div_ceil(2) % HOUR_SLOT_COUNT as u32) as u8)
    }

    /// The index as a `usize` for table lookups.
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// The index as a palace-counting step.
    pub fn steps(self) -> u32 {
        u32::from(self.0)
    }
}

impl std::fmt::Display for HourSlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_slot_spans_both_days() {
        assert_eq!(HourSlotIndex::from_clock_hour(23).get(), 0);
        assert_eq!(HourSlotIndex::from_clock_hour(0).get(), 0);
    }

    #[test]
    fn odd_hours_open_a_slot() {
        for slot in 1..12u32 {
            let opening = slot * 2 - 1;
            assert_eq!(HourSlotIndex::from_clock_hour(opening).get(), slot as usize);
            assert_eq!(HourSlotIndex::from_clock_hour(opening + 1).get(), slot as usize);
        }
    }

    #[test]
    fn slot_ranges_match_index_mapping() {
        let slots = builtin_hour_slots();
        for hour in 0..24u32 {
            let slot = &slots[HourSlotIndex::from_clock_hour(hour).get()];
            let start: u32 = slot.display_range[..2].parse().unwrap();
            let covers = (hour + 24 - start) % 24 < 2;
            assert!(covers, "hour {hour} mapped to {slot}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(builtin_hour_slots()[1].to_string(), "丑时 (01:00-03:00)");
    }
}
