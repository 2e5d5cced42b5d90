//! Reverse index: pocket → neighbor groups covering it.
//!
//! Every pocket sits in exactly `2 * radius + 1` groups, once at each member
//! offset. Entry `k` of a pocket's list is the group in which that pocket is
//! member `k`, so a list starts with the group the pocket opens, passes the
//! group centered on it at entry `radius`, and ends with the group it closes.
//!
//! ```text
//! radius 1, pocket 0:  0-32-15   26-0-32   3-26-0
//! ```

use crate::neighbors::{GroupTable, NeighborRadius};
use crate::POCKET_COUNT;

/// Labels of every group covering each pocket, at one radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseIndex {
    radius: NeighborRadius,
    entries: Vec<Vec<String>>,
}

impl ReverseIndex {
    /// Scan every group once, filing its label under each member at that
    /// member's offset.
    pub fn build(table: &GroupTable) -> Self {
        let size = table.radius().group_size();
        let mut slots: Vec<Vec<Option<&str>>> = vec![vec![None; size]; POCKET_COUNT];

        for group in table {
            for (offset, &pocket) in group.members().iter().enumerate() {
                slots[pocket as usize][offset] = Some(group.label());
            }
        }

        let entries: Vec<Vec<String>> = slots
            .into_iter()
            .map(|row| row.into_iter().flatten().map(str::to_owned).collect())
            .collect();

        debug_assert!(entries.iter().all(|labels| labels.len() == size));
        tracing::debug!(
            radius = table.radius().value(),
            labels_per_pocket = size,
            "built reverse index"
        );

        Self {
            radius: table.radius(),
            entries,
        }
    }

    pub fn radius(&self) -> NeighborRadius {
        self.radius
    }

    /// Labels of the groups covering `pocket`, or `None` above 36.
    pub fn labels(&self, pocket: u8) -> Option<&[String]> {
        self.entries.get(pocket as usize).map(Vec::as_slice)
    }

    /// `(pocket, labels)` pairs in numeric pocket order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[String])> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(pocket, labels)| (pocket as u8, labels.as_slice()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ReverseIndex {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (pocket, labels) in self.iter() {
            map.serialize_entry(&pocket, labels)?;
        }
        map.end()
    }
}
