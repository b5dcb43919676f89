//! Game setup configuration and validation.
//!
//! Everything a game needs before the first turn is validated here, at the
//! console boundary: grid dimensions and player names. The engine itself
//! only ever sees values that already passed - `Grid` takes a `GridDims`,
//! `Roster` takes claimed names - so it has no recoverable error paths.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::Symbol;

/// Maximum number of cells in a grid.
///
/// Two cells per symbol, so the alphabet caps the grid at 186 cells.
pub const MAX_CELLS: usize = 2 * Symbol::ALPHABET_LEN;

/// Minimum number of players.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players.
pub const MAX_PLAYERS: usize = 6;

/// Invalid setup input, reported back through the console's re-prompt loops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("grid dimensions must be positive")]
    NonPositiveDimension,
    #[error("a grid of {0} cells cannot be split into pairs")]
    OddCellCount(usize),
    #[error("a grid of {0} cells exceeds the maximum of {}", MAX_CELLS)]
    TooManyCells(usize),
    #[error("name is empty or contains only white spaces")]
    BlankName,
    #[error("name {0:?} is already used")]
    DuplicateName(String),
}

/// Validated grid dimensions.
///
/// Construction enforces the grid invariants - both sides positive, an even
/// cell count, and at most [`MAX_CELLS`] cells - so a `Grid` can only ever be
/// built from dimensions that satisfy them.
///
/// ```
/// use pelmanism::core::GridDims;
///
/// let dims = GridDims::new(4, 5).unwrap();
/// assert_eq!(dims.cell_count(), 20);
/// assert_eq!(dims.pair_count(), 10);
///
/// assert!(GridDims::new(3, 3).is_err()); // odd cell count
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    height: usize,
    width: usize,
}

impl GridDims {
    /// Validate a height/width pair.
    pub fn new(height: usize, width: usize) -> Result<Self, SetupError> {
        if height == 0 || width == 0 {
            return Err(SetupError::NonPositiveDimension);
        }

        let total = height.saturating_mul(width);
        if total > MAX_CELLS {
            return Err(SetupError::TooManyCells(total));
        }
        if total % 2 != 0 {
            return Err(SetupError::OddCellCount(total));
        }

        Ok(Self { height, width })
    }

    /// Grid height in rows.
    #[must_use]
    pub const fn height(self) -> usize {
        self.height
    }

    /// Grid width in columns.
    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.height * self.width
    }

    /// Number of symbol pairs the grid holds.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.cell_count() / 2
    }
}

/// Tracks claimed player names and enforces uniqueness.
///
/// Names are compared case-insensitively, so "Ada" blocks a later "ada".
#[derive(Debug, Default)]
pub struct NameRegistry {
    taken: FxHashSet<String>,
}

impl NameRegistry {
    /// Validate and claim a candidate name.
    ///
    /// Returns the trimmed name on success; the registry remembers it and
    /// rejects any later case-insensitive duplicate.
    pub fn claim(&mut self, candidate: &str) -> Result<String, SetupError> {
        let name = candidate.trim();
        if name.is_empty() {
            return Err(SetupError::BlankName);
        }

        let key = name.to_lowercase();
        if self.taken.contains(&key) {
            return Err(SetupError::DuplicateName(name.to_string()));
        }

        self.taken.insert(key);
        Ok(name.to_string())
    }
}
