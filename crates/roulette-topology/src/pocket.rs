//! Outside-bet classes of a pocket: parity, halves, dozens and columns.
//!
//! Zero belongs to none of them. Each family splits 1..=36 evenly, so every
//! class covers 18/37 (parity, halves) or 12/37 (dozens, columns) of the wheel.

use crate::sector::Sector;
use crate::wheel::Color;
use crate::POCKET_COUNT;

const HIGHEST: u8 = (POCKET_COUNT - 1) as u8;

/// Even or odd. Zero is `Neither`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parity {
    Even,
    Odd,
    #[cfg_attr(feature = "serde", serde(rename = "None"))]
    Neither,
}

impl Parity {
    /// Parity of a pocket, or `None` above 36.
    pub fn of(pocket: u8) -> Option<Self> {
        match pocket {
            0 => Some(Self::Neither),
            p if p > HIGHEST => None,
            p if p % 2 == 0 => Some(Self::Even),
            _ => Some(Self::Odd),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Even => "Even",
            Self::Odd => "Odd",
            Self::Neither => "None",
        }
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric range bet: one of the two halves or one of the three dozens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interval {
    Low,
    High,
    FirstDozen,
    SecondDozen,
    ThirdDozen,
}

impl Interval {
    pub const HALVES: [Self; 2] = [Self::Low, Self::High];

    pub const DOZENS: [Self; 3] = [Self::FirstDozen, Self::SecondDozen, Self::ThirdDozen];

    pub const ALL: [Self; 5] = [
        Self::Low,
        Self::High,
        Self::FirstDozen,
        Self::SecondDozen,
        Self::ThirdDozen,
    ];

    /// Inclusive `(first, last)` pocket numbers.
    pub const fn bounds(self) -> (u8, u8) {
        match self {
            Self::Low => (1, 18),
            Self::High => (19, 36),
            Self::FirstDozen => (1, 12),
            Self::SecondDozen => (13, 24),
            Self::ThirdDozen => (25, 36),
        }
    }

    pub fn contains(self, pocket: u8) -> bool {
        let (first, last) = self.bounds();
        (first..=last).contains(&pocket)
    }

    pub fn pocket_count(self) -> usize {
        let (first, last) = self.bounds();
        (last - first + 1) as usize
    }

    /// Share of the wheel the interval covers.
    pub fn coverage(self) -> f64 {
        self.pocket_count() as f64 / POCKET_COUNT as f64
    }

    /// 1-18 or 19-36, `None` for zero.
    pub fn half_of(pocket: u8) -> Option<Self> {
        Self::HALVES.into_iter().find(|i| i.contains(pocket))
    }

    /// The dozen holding `pocket`, `None` for zero.
    pub fn dozen_of(pocket: u8) -> Option<Self> {
        Self::DOZENS.into_iter().find(|i| i.contains(pocket))
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (first, last) = self.bounds();
        write!(f, "{}-{}", first, last)
    }
}

/// A column of the betting layout, picked by `pocket % 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Column {
    #[cfg_attr(feature = "serde", serde(rename = "line-1"))]
    Line1,
    #[cfg_attr(feature = "serde", serde(rename = "line-2"))]
    Line2,
    #[cfg_attr(feature = "serde", serde(rename = "line-3"))]
    Line3,
}

impl Column {
    pub const ALL: [Self; 3] = [Self::Line1, Self::Line2, Self::Line3];

    /// Column of a pocket; `None` for zero and above 36.
    pub fn of(pocket: u8) -> Option<Self> {
        match pocket {
            0 => None,
            p if p > HIGHEST => None,
            p => Some(match p % 3 {
                1 => Self::Line1,
                2 => Self::Line2,
                _ => Self::Line3,
            }),
        }
    }

    /// Share of the wheel a column covers.
    pub fn coverage(self) -> f64 {
        12.0 / POCKET_COUNT as f64
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Line1 => "line-1",
            Self::Line2 => "line-2",
            Self::Line3 => "line-3",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Every class a pocket falls into.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PocketClasses {
    pub pocket: u8,
    pub color: Color,
    pub parity: Parity,
    pub sectors: Vec<Sector>,
    pub half: Option<Interval>,
    pub dozen: Option<Interval>,
    pub column: Option<Column>,
}

impl PocketClasses {
    /// Classify a pocket, or `None` above 36.
    pub fn of(pocket: u8) -> Option<Self> {
        Some(Self {
            pocket,
            color: Color::of(pocket)?,
            parity: Parity::of(pocket)?,
            sectors: Sector::ALL.into_iter().filter(|s| s.contains(pocket)).collect(),
            half: Interval::half_of(pocket),
            dozen: Interval::dozen_of(pocket),
            column: Column::of(pocket),
        })
    }

    /// Variant keys this pocket hits, in the `kind-value` form used by
    /// waiting-variant tracking (`color-Red`, `interval-1-18`, ...).
    ///
    /// Zero contributes only its sectors.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        if self.color != Color::Green {
            keys.push(format!("color-{}", self.color));
        }
        if self.parity != Parity::Neither {
            keys.push(format!("type-{}", self.parity));
        }
        keys.extend(self.sectors.iter().map(|s| format!("sector-{}", s)));
        keys.extend(
            self.half
                .iter()
                .chain(self.dozen.iter())
                .map(|i| format!("interval-{}", i)),
        );
        keys.extend(self.column.iter().map(|c| format!("column-{}", c)));
        keys
    }
}
