//! The six palaces of Xiao Liu Ren.
//!
//! Palaces are counted on the fingers in a fixed ring: 大安, 留连, 速喜,
//! 赤口, 小吉, 空亡. Each one carries a fortune, an element, and a short
//! interpretation.

use serde::{Deserialize, Serialize};

/// Number of palaces in the ring.
pub const PALACE_COUNT: usize = 6;

/// Whether a palace is considered lucky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fortune {
    /// 吉
    Auspicious,
    /// 凶
    Inauspicious,
}

impl Fortune {
    /// The single-character label used in readings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Auspicious => "吉",
            Self::Inauspicious => "凶",
        }
    }

    /// Returns `true` for [`Fortune::Auspicious`].
    pub fn is_auspicious(self) -> bool {
        matches!(self, Self::Auspicious)
    }
}

impl std::fmt::Display for Fortune {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The five elements (五行).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// 木
    Wood,
    /// 土
    Earth,
    /// 火
    Fire,
    /// 金
    Metal,
    /// 水
    Water,
}

impl Element {
    /// The single-character label used in readings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Earth => "土",
            Self::Fire => "火",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the palace table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceDefinition {
    /// Palace name, e.g. `大安`.
    pub name: String,
    /// Lucky or unlucky.
    pub fortune: Fortune,
    /// Associated element.
    pub element: Element,
    /// Interpretation text.
    pub description: String,
}

impl PalaceDefinition {
    /// Create a palace row.
    pub fn new(
        name: impl Into<String>,
        fortune: Fortune,
        element: Element,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            fortune,
            element,
            description: description.into(),
        }
    }
}

/// The built-in palace ring, in counting order.
pub fn builtin_palaces() -> [PalaceDefinition; PALACE_COUNT] {
    use Element::*;
    use Fortune::*;
    [
        PalaceDefinition::new("大安", Auspicious, Wood, "安稳清吉，贵人扶持"),
        PalaceDefinition::new("留连", Inauspicious, Earth, "反复拖延，纠缠不休"),
        PalaceDefinition::new("速喜", Auspicious, Fire, "喜讯速至，合作有利"),
        PalaceDefinition::new("赤口", Inauspicious, Metal, "官非口舌，金属血光"),
        PalaceDefinition::new("小吉", Auspicious, Water, "谋事可成，出行有利"),
        PalaceDefinition::new("空亡", Inauspicious, Earth, "事有不成，财防落空"),
    ]
}

/// A position in the palace ring, always in `0..6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PalaceIndex(u8);

impl PalaceIndex {
    /// Reduce any count onto the ring.
    pub fn new(raw: u32) -> Self {
        Self((raw % PALACE_COUNT as u32) as u8)
    }

    /// The index as a `usize` for table lookups.
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// Continue counting `steps` palaces from this one.
    pub fn advance(self, steps: u32) -> Self {
        Self::new(u32::from(self.0) + steps % PALACE_COUNT as u32)
    }
}

impl std::fmt::Display for PalaceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a palace sits in a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PalacePosition {
    /// 月宫, counted from the lunar month.
    Month,
    /// 日宫, counted on from the month palace by the lunar day.
    Day,
    /// 时宫, counted on from the day palace by the hour slot.
    Hour,
}

impl PalacePosition {
    /// All positions in presentation order.
    pub const ALL: [Self; 3] = [Self::Month, Self::Day, Self::Hour];

    /// The traditional label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Month => "月宫",
            Self::Day => "日宫",
            Self::Hour => "时宫",
        }
    }
}

impl std::fmt::Display for PalacePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
