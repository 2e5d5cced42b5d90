//! Physical pocket ordering of a single-zero roulette wheel.
//!
//! A wheel is a circular sequence: the successor of the last pocket is the
//! first one. Positions are indices into that sequence and wrap modulo 37,
//! so `at(-1)` and `at(36)` name the same pocket.

use crate::error::{Error, Result, WheelDefect};
use crate::POCKET_COUNT;

/// Pocket sequence of the European wheel, clockwise from zero.
pub const EUROPEAN_WHEEL: [u8; POCKET_COUNT] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10,
    5, 24, 16, 33, 1, 20, 14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

/// Red pockets, in numeric order.
pub const RED_POCKETS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// A validated circular ordering of the pockets 0..=36.
///
/// Holds the sequence together with its inverse (pocket → position), so both
/// directions of lookup are constant time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
pub struct WheelOrder {
    pockets: [u8; POCKET_COUNT],
    positions: [u8; POCKET_COUNT],
}

impl WheelOrder {
    /// The standard European layout.
    pub const EUROPEAN: Self = Self::from_permutation(EUROPEAN_WHEEL);

    /// Validate a candidate ordering.
    ///
    /// Fails unless `pockets` holds each of 0..=36 exactly once.
    pub fn new(pockets: &[u8]) -> Result<Self> {
        if pockets.len() != POCKET_COUNT {
            return Err(WheelDefect::Length {
                expected: POCKET_COUNT,
                actual: pockets.len(),
            }
            .into());
        }

        let mut seen = [false; POCKET_COUNT];
        let mut order = [0u8; POCKET_COUNT];
        for (position, &pocket) in pockets.iter().enumerate() {
            let slot = seen
                .get_mut(pocket as usize)
                .ok_or(WheelDefect::OutOfRange { pocket, position })?;
            if *slot {
                return Err(WheelDefect::Duplicate { pocket, position }.into());
            }
            *slot = true;
            order[position] = pocket;
        }

        Ok(Self::from_permutation(order))
    }

    // Caller guarantees `pockets` is a permutation of 0..=36.
    const fn from_permutation(pockets: [u8; POCKET_COUNT]) -> Self {
        let mut positions = [0u8; POCKET_COUNT];
        let mut i = 0;
        while i < POCKET_COUNT {
            positions[pockets[i] as usize] = i as u8;
            i += 1;
        }
        Self { pockets, positions }
    }

    /// The pockets in wheel order.
    pub const fn pockets(&self) -> &[u8; POCKET_COUNT] {
        &self.pockets
    }

    /// Iterate pockets in wheel order, starting at position 0.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.pockets.iter().copied()
    }

    /// Wheel position of a pocket, or `None` if the number is not on the wheel.
    #[inline]
    pub fn position_of(&self, pocket: u8) -> Option<usize> {
        self.positions.get(pocket as usize).map(|&p| p as usize)
    }

    /// Pocket at a position, wrapping in both directions.
    #[inline]
    pub fn at(&self, position: isize) -> u8 {
        self.pockets[position.rem_euclid(POCKET_COUNT as isize) as usize]
    }

    /// The next pocket clockwise.
    pub fn successor(&self, pocket: u8) -> Option<u8> {
        self.position_of(pocket).map(|p| self.at(p as isize + 1))
    }

    /// The next pocket counter-clockwise.
    pub fn predecessor(&self, pocket: u8) -> Option<u8> {
        self.position_of(pocket).map(|p| self.at(p as isize - 1))
    }

    /// Number of steps between two pockets along the shorter way round.
    pub fn distance(&self, a: u8, b: u8) -> Option<usize> {
        let pa = self.position_of(a)?;
        let pb = self.position_of(b)?;
        let forward = pa.abs_diff(pb);
        Some(forward.min(POCKET_COUNT - forward))
    }

    /// `len` pockets clockwise from `start`, inclusive, wrapping past zero.
    ///
    /// `len` larger than the wheel repeats pockets; callers that need distinct
    /// pockets keep it at or below 37.
    pub fn arc(&self, start: u8, len: usize) -> Option<impl Iterator<Item = u8> + '_> {
        let origin = self.position_of(start)? as isize;
        Some((0..len as isize).map(move |k| self.at(origin + k)))
    }
}

impl Default for WheelOrder {
    fn default() -> Self {
        Self::EUROPEAN
    }
}

impl TryFrom<&[u8]> for WheelOrder {
    type Error = Error;

    fn try_from(pockets: &[u8]) -> Result<Self> {
        Self::new(pockets)
    }
}

impl TryFrom<Vec<u8>> for WheelOrder {
    type Error = Error;

    fn try_from(pockets: Vec<u8>) -> Result<Self> {
        Self::new(&pockets)
    }
}

impl From<WheelOrder> for Vec<u8> {
    fn from(wheel: WheelOrder) -> Self {
        wheel.pockets.to_vec()
    }
}

/// Pocket colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Green,
    Red,
    Black,
}

impl Color {
    /// Colour of a pocket, or `None` above 36.
    pub fn of(pocket: u8) -> Option<Self> {
        match pocket {
            0 => Some(Self::Green),
            p if p as usize >= POCKET_COUNT => None,
            p if RED_POCKETS.contains(&p) => Some(Self::Red),
            _ => Some(Self::Black),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Black => "Black",
        };
        f.write_str(name)
    }
}
