//! Neighbor-bet groups.
//!
//! A neighbor bet covers one pocket plus `radius` physical neighbors on each
//! side. For every wheel position there is exactly one group centered on it,
//! so a table holds 37 groups regardless of radius:
//!
//! - radius 1: 3 pockets per group (`26-0-32`)
//! - radius 3: 7 pockets per group (`35-3-26-0-32-15-19`)
//!
//! Members are read clockwise as a contiguous slice of the wheel with the
//! center at index `radius`. The label joins them with `-` in that same order,
//! never numerically sorted.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::wheel::WheelOrder;
use crate::{MAX_RADIUS, POCKET_COUNT};

/// Half-width of a neighbor group, excluding the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "usize", into = "usize"))]
pub struct NeighborRadius(usize);

impl NeighborRadius {
    /// Single-neighbor bets (groups of 3).
    pub const ONE: Self = Self(1);

    /// Three-neighbor bets (groups of 7).
    pub const THREE: Self = Self(3);

    /// Validate a radius. Only 1..=18 keeps every group free of repeats.
    pub fn new(radius: usize) -> Result<Self> {
        if (1..=MAX_RADIUS).contains(&radius) {
            Ok(Self(radius))
        } else {
            Err(Error::InvalidRadius {
                radius,
                max: MAX_RADIUS,
            })
        }
    }

    /// Every supported radius, ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_RADIUS).map(Self)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Pockets per group: `2 * radius + 1`.
    #[inline]
    pub const fn group_size(self) -> usize {
        2 * self.0 + 1
    }

    /// Share of the wheel one group covers.
    pub fn coverage(self) -> f64 {
        self.group_size() as f64 / POCKET_COUNT as f64
    }
}

impl TryFrom<usize> for NeighborRadius {
    type Error = Error;

    fn try_from(radius: usize) -> Result<Self> {
        Self::new(radius)
    }
}

impl From<NeighborRadius> for usize {
    fn from(radius: NeighborRadius) -> Self {
        radius.0
    }
}

impl std::fmt::Display for NeighborRadius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical label for a member sequence: pockets joined by `-`.
pub fn label(members: &[u8]) -> String {
    members
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

/// One neighbor bet: a center pocket and its wheel-adjacent members.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NeighborGroup {
    center: u8,
    members: Vec<u8>,
    label: String,
}

impl NeighborGroup {
    fn around(wheel: &WheelOrder, position: usize, radius: NeighborRadius) -> Self {
        let r = radius.value() as isize;
        let position = position as isize;
        let members: Vec<u8> = (-r..=r).map(|k| wheel.at(position + k)).collect();
        Self {
            center: wheel.at(position),
            label: label(&members),
            members,
        }
    }

    #[inline]
    pub fn center(&self) -> u8 {
        self.center
    }

    /// Members in clockwise wheel order.
    #[inline]
    pub fn members(&self) -> &[u8] {
        &self.members
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn radius(&self) -> usize {
        self.members.len() / 2
    }

    pub fn contains(&self, pocket: u8) -> bool {
        self.members.contains(&pocket)
    }

    /// Index of `pocket` within the members, if covered.
    pub fn offset_of(&self, pocket: u8) -> Option<usize> {
        self.members.iter().position(|&m| m == pocket)
    }
}

impl std::fmt::Display for NeighborGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// All 37 groups of one radius, keyed by label.
///
/// Iteration follows the wheel position of each group's center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTable {
    radius: NeighborRadius,
    groups: Vec<NeighborGroup>,
    by_label: HashMap<String, usize>,
    by_center: [usize; POCKET_COUNT],
}

impl GroupTable {
    /// Slide a `2 * radius + 1` window once around the wheel.
    pub fn derive(wheel: &WheelOrder, radius: NeighborRadius) -> Self {
        let groups: Vec<NeighborGroup> = (0..POCKET_COUNT)
            .map(|position| NeighborGroup::around(wheel, position, radius))
            .collect();

        let by_label = groups
            .iter()
            .enumerate()
            .map(|(i, group)| (group.label.clone(), i))
            .collect();

        let mut by_center = [0; POCKET_COUNT];
        for (i, group) in groups.iter().enumerate() {
            by_center[group.center as usize] = i;
        }

        tracing::debug!(
            radius = radius.value(),
            groups = groups.len(),
            "derived neighbor groups"
        );

        Self {
            radius,
            groups,
            by_label,
            by_center,
        }
    }

    pub fn radius(&self) -> NeighborRadius {
        self.radius
    }

    /// Number of groups (always 37).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look a group up by its label.
    pub fn get(&self, label: &str) -> Option<&NeighborGroup> {
        self.by_label.get(label).map(|&i| &self.groups[i])
    }

    /// Members of the group with this label.
    pub fn members(&self, label: &str) -> Option<&[u8]> {
        self.get(label).map(NeighborGroup::members)
    }

    /// The group centered on `pocket`.
    pub fn centered_at(&self, pocket: u8) -> Option<&NeighborGroup> {
        self.by_center.get(pocket as usize).map(|&i| &self.groups[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NeighborGroup> {
        self.groups.iter()
    }

    /// Labels ordered by the wheel position of their center.
    pub fn variants(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(NeighborGroup::label)
    }

    /// Labels ordered by the number of their center pocket.
    pub fn variants_by_pocket(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_center.iter().map(|&i| self.groups[i].label())
    }
}

impl<'a> IntoIterator for &'a GroupTable {
    type Item = &'a NeighborGroup;
    type IntoIter = std::slice::Iter<'a, NeighborGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GroupTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(group.label(), group.members())?;
        }
        map.end()
    }
}

/// Validate raw inputs, then derive the group table.
///
/// Both checks run before any group is built.
pub fn derive_groups(pockets: &[u8], radius: usize) -> Result<GroupTable> {
    let wheel = WheelOrder::new(pockets)?;
    let radius = NeighborRadius::new(radius)?;
    Ok(GroupTable::derive(&wheel, radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WheelDefect;
    use crate::wheel::EUROPEAN_WHEEL;
    use proptest::prelude::*;

    fn european(radius: usize) -> GroupTable {
        GroupTable::derive(&WheelOrder::EUROPEAN, NeighborRadius::new(radius).unwrap())
    }

    #[test]
    fn radius_bounds() {
        assert!(NeighborRadius::new(1).is_ok());
        assert!(NeighborRadius::new(18).is_ok());
        assert_eq!(
            NeighborRadius::new(0),
            Err(Error::InvalidRadius { radius: 0, max: 18 })
        );
        assert_eq!(
            NeighborRadius::new(19),
            Err(Error::InvalidRadius { radius: 19, max: 18 })
        );
        assert_eq!(NeighborRadius::all().count(), 18);
    }

    #[test]
    fn group_sizes() {
        assert_eq!(NeighborRadius::ONE.group_size(), 3);
        assert_eq!(NeighborRadius::THREE.group_size(), 7);
        assert_eq!(NeighborRadius::new(18).unwrap().group_size(), 37);
    }

    #[test]
    fn coverage_matches_event_ratios() {
        assert!((NeighborRadius::ONE.coverage() - 3.0 / 37.0).abs() < f64::EPSILON);
        assert!((NeighborRadius::THREE.coverage() - 7.0 / 37.0).abs() < f64::EPSILON);
        assert!((NeighborRadius::new(18).unwrap().coverage() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn label_keeps_wheel_order() {
        assert_eq!(label(&[26, 0, 32]), "26-0-32");
        assert_eq!(label(&[7]), "7");
        assert_eq!(label(&[]), "");
    }

    #[test]
    fn one_neighbor_golden() {
        let table = european(1);
        let zero = table.centered_at(0).unwrap();
        assert_eq!(zero.label(), "26-0-32");
        assert_eq!(zero.members(), &[26, 0, 32]);
        assert_eq!(table.members("26-0-32"), Some(&[26, 0, 32][..]));
        assert_eq!(table.members("13-36-11"), Some(&[13, 36, 11][..]));
        assert_eq!(table.get("3-26-0").map(NeighborGroup::center), Some(26));
    }

    #[test]
    fn three_neighbor_golden() {
        let table = european(3);
        assert_eq!(table.centered_at(0).unwrap().label(), "35-3-26-0-32-15-19");

        let group = table.get("0-32-15-19-4-21-2").unwrap();
        assert_eq!(group.members(), &[0, 32, 15, 19, 4, 21, 2]);
        assert_eq!(group.center(), 19);

        assert_eq!(
            table.members("6-27-13-36-11-30-8"),
            Some(&[6, 27, 13, 36, 11, 30, 8][..])
        );
    }

    #[test]
    fn variants_follow_wheel_order() {
        let table = european(1);
        let variants: Vec<_> = table.variants().take(4).collect();
        assert_eq!(variants, ["26-0-32", "0-32-15", "32-15-19", "15-19-4"]);
        assert_eq!(table.variants().last(), Some("3-26-0"));
    }

    #[test]
    fn variants_by_pocket_follow_numbers() {
        let table = european(1);
        let variants: Vec<_> = table.variants_by_pocket().take(5).collect();
        assert_eq!(variants, ["26-0-32", "33-1-20", "21-2-25", "35-3-26", "19-4-21"]);

        let table = european(3);
        let variants: Vec<_> = table.variants_by_pocket().take(3).collect();
        assert_eq!(
            variants,
            ["35-3-26-0-32-15-19", "24-16-33-1-20-14-31", "19-4-21-2-25-17-34"]
        );
    }

    #[test]
    fn labels_are_not_sorted() {
        let table = european(1);
        let group = table.centered_at(26).unwrap();
        assert_eq!(group.label(), "3-26-0");
        assert_eq!(group.offset_of(0), Some(2));
        assert_eq!(group.offset_of(15), None);
        assert_eq!(group.to_string(), "3-26-0");
    }

    #[test]
    fn full_width_groups_are_rotations() {
        let table = european(18);
        assert_eq!(table.len(), 37);
        for group in &table {
            assert_eq!(group.members().len(), 37);
            for pocket in 0..37 {
                assert!(group.contains(pocket));
            }
        }
        // 18 steps counter-clockwise from zero lands on 5
        assert_eq!(&table.centered_at(0).unwrap().members()[..3], &[5, 24, 16]);
    }

    #[test]
    fn derive_groups_validates_first() {
        let mut missing = EUROPEAN_WHEEL.to_vec();
        missing.pop();
        assert_eq!(
            derive_groups(&missing, 1),
            Err(Error::InvalidWheelOrder(WheelDefect::Length { expected: 37, actual: 36 }))
        );
        assert!(matches!(
            derive_groups(&EUROPEAN_WHEEL, 0),
            Err(Error::InvalidRadius { radius: 0, .. })
        ));
        assert!(matches!(
            derive_groups(&EUROPEAN_WHEEL, 19),
            Err(Error::InvalidRadius { radius: 19, .. })
        ));
        assert_eq!(derive_groups(&EUROPEAN_WHEEL, 3), Ok(european(3)));
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = european(3);
        let b = european(3);
        assert_eq!(a, b);
        assert!(a.variants().eq(b.variants()));
    }

    fn shuffled_wheel() -> impl Strategy<Value = WheelOrder> {
        Just(EUROPEAN_WHEEL.to_vec())
            .prop_shuffle()
            .prop_map(|pockets| WheelOrder::new(&pockets).unwrap())
    }

    proptest! {
        #[test]
        fn every_pocket_centers_one_group(wheel in shuffled_wheel(), radius in 1usize..=18) {
            let radius = NeighborRadius::new(radius).unwrap();
            let table = GroupTable::derive(&wheel, radius);

            prop_assert_eq!(table.len(), 37);
            for pocket in 0..37u8 {
                let group = table.centered_at(pocket).unwrap();
                prop_assert_eq!(group.members().len(), radius.group_size());
                prop_assert_eq!(group.members()[radius.value()], pocket);
                prop_assert_eq!(table.get(group.label()), Some(group));
            }
        }

        #[test]
        fn members_cover_each_pocket_evenly(wheel in shuffled_wheel(), radius in 1usize..=18) {
            let radius = NeighborRadius::new(radius).unwrap();
            let table = GroupTable::derive(&wheel, radius);

            let mut counts = [0usize; 37];
            for group in &table {
                for &m in group.members() {
                    counts[m as usize] += 1;
                }
            }
            prop_assert!(counts.iter().all(|&c| c == radius.group_size()));
        }

        #[test]
        fn members_are_contiguous(wheel in shuffled_wheel(), radius in 1usize..=18) {
            let table = GroupTable::derive(&wheel, NeighborRadius::new(radius).unwrap());
            for group in &table {
                for pair in group.members().windows(2) {
                    prop_assert_eq!(wheel.successor(pair[0]), Some(pair[1]));
                }
            }
        }
    }
}
