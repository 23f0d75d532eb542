//! The read-only lookup tables held by the calculator.

use serde::{Deserialize, Serialize};

use crate::hour::{HOUR_SLOT_COUNT, HourSlot, HourSlotIndex, builtin_hour_slots};
use crate::palace::{PALACE_COUNT, PalaceDefinition, PalaceIndex, builtin_palaces};

/// Palace ring and double-hour table used to assemble readings.
///
/// The fixed-size arrays mean a table with the wrong number of rows cannot
/// be built or deserialized, so lookups through [`PalaceIndex`] and
/// [`HourSlotIndex`] are always in range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    palaces: [PalaceDefinition; PALACE_COUNT],
    hour_slots: [HourSlot; HOUR_SLOT_COUNT],
}

impl Default for Tables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Tables {
    /// The traditional tables.
    pub fn builtin() -> Self {
        Self {
            palaces: builtin_palaces(),
            hour_slots: builtin_hour_slots(),
        }
    }

    /// Replace the palace ring.
    pub fn with_palaces(mut self, palaces: [PalaceDefinition; PALACE_COUNT]) -> Self {
        self.palaces = palaces;
        self
    }

    /// Replace the double-hour table.
    pub fn with_hour_slots(mut self, hour_slots: [HourSlot; HOUR_SLOT_COUNT]) -> Self {
        self.hour_slots = hour_slots;
        self
    }

    /// All palaces in counting order.
    pub fn palaces(&self) -> &[PalaceDefinition; PALACE_COUNT] {
        &self.palaces
    }

    /// All double-hours, starting at 子.
    pub fn hour_slots(&self) -> &[HourSlot; HOUR_SLOT_COUNT] {
        &self.hour_slots
    }

    /// Look up a palace.
    pub fn palace(&self, index: PalaceIndex) -> &PalaceDefinition {
        &self.palaces[index.get()]
    }

    /// Look up a double-hour.
    pub fn hour_slot(&self, index: HourSlotIndex) -> &HourSlot {
        &self.hour_slots[index.get()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palace::{Element, Fortune};

    #[test]
    fn default_is_builtin() {
        assert_eq!(Tables::default(), Tables::builtin());
        assert_eq!(Tables::default().palace(PalaceIndex::new(0)).name, "大安");
        assert_eq!(Tables::default().hour_slot(HourSlotIndex::from_clock_hour(12)).name, "午");
    }

    #[test]
    fn replace_palaces() {
        let mut palaces = builtin_palaces();
        palaces[0] = PalaceDefinition::new("Great Peace", Fortune::Auspicious, Element::Wood, "calm");
        let tables = Tables::builtin().with_palaces(palaces);
        assert_eq!(tables.palace(PalaceIndex::new(6)).name, "Great Peace");
        assert_eq!(tables.hour_slots(), Tables::builtin().hour_slots());
    }

    #[test]
    fn json_round_trip_keeps_rows() {
        let json = serde_json::to_string(&Tables::builtin()).unwrap();
        let back: Tables = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tables::builtin());
    }

    #[test]
    fn json_with_missing_row_rejected() {
        let mut value = serde_json::to_value(Tables::builtin()).unwrap();
        value["palaces"].as_array_mut().unwrap().pop();
        assert!(serde_json::from_value::<Tables>(value).is_err());
    }
}
