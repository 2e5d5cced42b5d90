//! French call-bet sectors of the European wheel.
//!
//! Each sector is one or two clockwise arcs:
//!
//! | Sector            | Arcs              | Pockets |
//! |-------------------|-------------------|---------|
//! | Zero spiel        | 12 ..= 15         | 7       |
//! | Voisins du zéro   | 22 ..= 25         | 17      |
//! | Orphelins         | 17 ..= 6, 1 ..= 9 | 8       |
//! | Tiers du cylindre | 27 ..= 33         | 12      |
//!
//! Voisins, Orphelins and Tiers partition the wheel. Zero spiel lies inside
//! Voisins.

use crate::wheel::WheelOrder;
use crate::POCKET_COUNT;

/// A named stretch of the European wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sector {
    #[cfg_attr(feature = "serde", serde(rename = "ZERO_SPIEL"))]
    ZeroSpiel,
    #[cfg_attr(feature = "serde", serde(rename = "VOISINS_DE_ZERO"))]
    VoisinsDuZero,
    #[cfg_attr(feature = "serde", serde(rename = "ORPHELINS"))]
    Orphelins,
    #[cfg_attr(feature = "serde", serde(rename = "TIER"))]
    Tiers,
}

impl Sector {
    pub const ALL: [Self; 4] = [
        Self::ZeroSpiel,
        Self::VoisinsDuZero,
        Self::Orphelins,
        Self::Tiers,
    ];

    /// Sectors that together cover each pocket exactly once.
    pub const PARTITION: [Self; 3] = [Self::VoisinsDuZero, Self::Orphelins, Self::Tiers];

    /// `(first pocket, length)` of each clockwise arc.
    pub const fn arcs(self) -> &'static [(u8, usize)] {
        match self {
            Self::ZeroSpiel => &[(12, 7)],
            Self::VoisinsDuZero => &[(22, 17)],
            Self::Orphelins => &[(17, 3), (1, 5)],
            Self::Tiers => &[(27, 12)],
        }
    }

    /// Pockets in clockwise order, arc by arc.
    pub fn pockets(self) -> Vec<u8> {
        let wheel = &WheelOrder::EUROPEAN;
        self.arcs()
            .iter()
            .filter_map(|&(start, len)| wheel.arc(start, len))
            .flatten()
            .collect()
    }

    pub fn pocket_count(self) -> usize {
        self.arcs().iter().map(|&(_, len)| len).sum()
    }

    /// Whether `pocket` lies on one of the arcs, measured clockwise from
    /// each arc's first pocket.
    pub fn contains(self, pocket: u8) -> bool {
        let wheel = &WheelOrder::EUROPEAN;
        let Some(position) = wheel.position_of(pocket) else {
            return false;
        };
        self.arcs().iter().any(|&(start, len)| {
            wheel
                .position_of(start)
                .is_some_and(|first| (position + POCKET_COUNT - first) % POCKET_COUNT < len)
        })
    }

    /// Share of the wheel the sector covers.
    pub fn coverage(self) -> f64 {
        self.pocket_count() as f64 / POCKET_COUNT as f64
    }

    /// The partition sector holding `pocket`, or `None` above 36.
    pub fn of(pocket: u8) -> Option<Self> {
        Self::PARTITION.into_iter().find(|s| s.contains(pocket))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ZeroSpiel => "ZERO_SPIEL",
            Self::VoisinsDuZero => "VOISINS_DE_ZERO",
            Self::Orphelins => "ORPHELINS",
            Self::Tiers => "TIER",
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_sizes() {
        assert_eq!(Sector::ZeroSpiel.pocket_count(), 7);
        assert_eq!(Sector::VoisinsDuZero.pocket_count(), 17);
        assert_eq!(Sector::Orphelins.pocket_count(), 8);
        assert_eq!(Sector::Tiers.pocket_count(), 12);
        for sector in Sector::ALL {
            assert_eq!(sector.pockets().len(), sector.pocket_count());
        }
    }

    #[test]
    fn zero_spiel_pockets() {
        assert_eq!(Sector::ZeroSpiel.pockets(), vec![12, 35, 3, 26, 0, 32, 15]);
    }

    #[test]
    fn orphelins_has_two_arcs() {
        assert_eq!(Sector::Orphelins.pockets(), vec![17, 34, 6, 1, 20, 14, 31, 9]);
    }

    #[test]
    fn partition_covers_wheel_once() {
        let mut counts = [0; 37];
        for sector in Sector::PARTITION {
            for pocket in sector.pockets() {
                counts[pocket as usize] += 1;
            }
        }
        assert!(counts.iter().all(|&c| c == 1));
    }

    #[test]
    fn zero_spiel_inside_voisins() {
        for pocket in Sector::ZeroSpiel.pockets() {
            assert_eq!(Sector::of(pocket), Some(Sector::VoisinsDuZero));
        }
    }

    #[test]
    fn sector_lookup() {
        assert_eq!(Sector::of(0), Some(Sector::VoisinsDuZero));
        assert_eq!(Sector::of(33), Some(Sector::Tiers));
        assert_eq!(Sector::of(9), Some(Sector::Orphelins));
        assert_eq!(Sector::of(37), None);
    }

    #[test]
    fn contains_agrees_with_pocket_list() {
        for sector in Sector::ALL {
            let pockets = sector.pockets();
            for pocket in 0..=37u8 {
                assert_eq!(
                    sector.contains(pocket),
                    pockets.contains(&pocket),
                    "{} / {}",
                    sector,
                    pocket
                );
            }
        }
        // Zero spiel runs across wheel position 0
        assert!(Sector::ZeroSpiel.contains(26));
        assert!(!Sector::ZeroSpiel.contains(19));
        assert!(!Sector::Orphelins.contains(27));
    }

    #[test]
    fn coverage_matches_event_ratios() {
        assert!((Sector::VoisinsDuZero.coverage() - 17.0 / 37.0).abs() < f64::EPSILON);
        assert!((Sector::Orphelins.coverage() - 8.0 / 37.0).abs() < f64::EPSILON);
    }
}
