//! Derived neighbor tables, bundled per radius.
//!
//! The European tables are computed on first use and cached for the life of
//! the process, one slot per radius. Readers share them by `&'static`
//! reference; nothing mutates them after construction.

use std::sync::OnceLock;

use crate::index::ReverseIndex;
use crate::neighbors::{GroupTable, NeighborGroup, NeighborRadius};
use crate::wheel::WheelOrder;
use crate::MAX_RADIUS;

/// Group table, variant list and reverse index for one wheel and radius.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NeighborTables {
    wheel: WheelOrder,
    radius: NeighborRadius,
    groups: GroupTable,
    variants: Vec<String>,
    reverse: ReverseIndex,
}

impl NeighborTables {
    /// Derive every table for `wheel` at `radius`.
    pub fn derive(wheel: &WheelOrder, radius: NeighborRadius) -> Self {
        let groups = GroupTable::derive(wheel, radius);
        let variants = groups.variants().map(str::to_owned).collect();
        let reverse = ReverseIndex::build(&groups);
        Self {
            wheel: wheel.clone(),
            radius,
            groups,
            variants,
            reverse,
        }
    }

    pub fn wheel(&self) -> &WheelOrder {
        &self.wheel
    }

    pub fn radius(&self) -> NeighborRadius {
        self.radius
    }

    pub fn groups(&self) -> &GroupTable {
        &self.groups
    }

    /// Every label, ordered by the wheel position of its center.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    pub fn reverse_index(&self) -> &ReverseIndex {
        &self.reverse
    }

    /// Members of the group with this label.
    pub fn members(&self, label: &str) -> Option<&[u8]> {
        self.groups.members(label)
    }

    /// Labels of every group covering `pocket`.
    pub fn covering(&self, pocket: u8) -> Option<&[String]> {
        self.reverse.labels(pocket)
    }

    /// Groups covering `pocket`, in reverse-index order.
    pub fn groups_covering(&self, pocket: u8) -> impl Iterator<Item = &NeighborGroup> + '_ {
        self.covering(pocket)
            .unwrap_or_default()
            .iter()
            .filter_map(|label| self.groups.get(label))
    }
}

static EUROPEAN: [OnceLock<NeighborTables>; MAX_RADIUS] = [const { OnceLock::new() }; MAX_RADIUS];

/// Memoized tables for the European wheel.
pub fn european(radius: NeighborRadius) -> &'static NeighborTables {
    EUROPEAN[radius.value() - 1].get_or_init(|| {
        tracing::debug!(radius = radius.value(), "deriving european neighbor tables");
        NeighborTables::derive(&WheelOrder::EUROPEAN, radius)
    })
}

/// Single-neighbor tables (groups of 3).
pub fn one_neighbor() -> &'static NeighborTables {
    european(NeighborRadius::ONE)
}

/// Three-neighbor tables (groups of 7).
pub fn three_neighbors() -> &'static NeighborTables {
    european(NeighborRadius::THREE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memoized_tables_are_shared() {
        let a = one_neighbor();
        let b = european(NeighborRadius::ONE);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn memoized_matches_fresh_derivation() {
        let fresh = NeighborTables::derive(&WheelOrder::EUROPEAN, NeighborRadius::THREE);
        assert_eq!(three_neighbors(), &fresh);
    }

    #[test]
    fn variants_match_group_order() {
        let tables = one_neighbor();
        assert_eq!(tables.variants().len(), 37);
        assert_eq!(tables.variants()[0], "26-0-32");
        assert!(tables
            .variants()
            .iter()
            .map(String::as_str)
            .eq(tables.groups().variants()));
    }

    #[test]
    fn groups_covering_follow_reverse_index() {
        let tables = one_neighbor();
        let centers: Vec<u8> = tables.groups_covering(0).map(NeighborGroup::center).collect();
        assert_eq!(centers, vec![32, 0, 26]);
        assert_eq!(tables.groups_covering(37).count(), 0);
    }

    #[test]
    fn every_radius_is_available() {
        for radius in NeighborRadius::all() {
            let tables = european(radius);
            assert_eq!(tables.radius(), radius);
            assert_eq!(tables.groups().len(), 37);
            for (pocket, labels) in tables.reverse_index().iter() {
                assert_eq!(labels.len(), radius.group_size());
                for label in labels {
                    assert!(tables.members(label).unwrap().contains(&pocket));
                }
            }
        }
    }

    #[test]
    fn shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| three_neighbors() as *const NeighborTables as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
