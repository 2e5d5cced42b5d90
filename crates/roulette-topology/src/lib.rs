//! Roulette Wheel Topology
//!
//! Neighbor-bet groups and their reverse index, derived from the physical
//! pocket order of a single-zero (European) wheel.
//!
//! # Derivation
//!
//! Only the 37-pocket wheel order is stored. Everything else is computed:
//!
//! 1. Slide a window of `2 * radius + 1` pockets once around the circular
//!    wheel, giving one group per center pocket (37 groups per radius).
//! 2. Label each group by joining its members with `-` in wheel order.
//! 3. Scan the groups and file each label under every pocket it covers,
//!    ordered by that pocket's offset inside the group.
//!
//! ```
//! use roulette_topology::tables;
//!
//! let one = tables::one_neighbor();
//! assert_eq!(one.members("26-0-32"), Some(&[26, 0, 32][..]));
//! assert_eq!(one.covering(0).unwrap(), ["0-32-15", "26-0-32", "3-26-0"]);
//! ```
//!
//! # Invariants
//!
//! - Each pocket centers exactly one group: `members[radius] == center`.
//! - Each pocket appears in exactly `2 * radius + 1` groups.
//! - Radius is bounded by 18, so no group repeats a pocket.

mod error;
mod index;
mod neighbors;
mod pocket;
mod sector;
pub mod tables;
mod wheel;

pub use error::{Error, Result, WheelDefect};
pub use index::ReverseIndex;
pub use neighbors::{derive_groups, label, GroupTable, NeighborGroup, NeighborRadius};
pub use pocket::{Column, Interval, Parity, PocketClasses};
pub use sector::Sector;
pub use tables::NeighborTables;
pub use wheel::{Color, WheelOrder, EUROPEAN_WHEEL, RED_POCKETS};

/// Pockets on a single-zero wheel (0..=36).
pub const POCKET_COUNT: usize = 37;

/// Largest radius whose groups never wrap onto themselves.
pub const MAX_RADIUS: usize = (POCKET_COUNT - 1) / 2;

// Compile-time assertion that a full-width group spans the wheel exactly
const _: () = assert!(2 * MAX_RADIUS + 1 == POCKET_COUNT);
