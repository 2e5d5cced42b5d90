//! Error types for roulette-topology.

use thiserror::Error;

/// Result type for roulette-topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating derivation inputs.
///
/// Both variants are reported before any table is built, so a failed
/// derivation never leaves a partial table behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The wheel order is not a permutation of 0..=36.
    #[error("invalid wheel order: {0}")]
    InvalidWheelOrder(#[from] WheelDefect),

    /// The neighbor radius is outside 1..=18.
    #[error("invalid radius {radius}: expected 1..={max}")]
    InvalidRadius { radius: usize, max: usize },
}

/// The first defect found in a candidate wheel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WheelDefect {
    /// Wrong number of pockets.
    #[error("expected {expected} pockets, got {actual}")]
    Length { expected: usize, actual: usize },

    /// A pocket number above 36.
    #[error("pocket {pocket} at position {position} is out of range")]
    OutOfRange { pocket: u8, position: usize },

    /// A pocket listed twice.
    #[error("pocket {pocket} repeated at position {position}")]
    Duplicate { pocket: u8, position: usize },
}
