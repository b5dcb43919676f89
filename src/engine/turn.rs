//! Turn state machine types.
//!
//! A turn walks `AwaitingFirstPick -> AwaitingSecondPick -> Resolving`.
//! Resolution either keeps the current player (match) or passes the turn
//! (no match), then loops back to `AwaitingFirstPick`, or reaches
//! `GameOver` once the grid is empty. The transitions themselves are pure
//! methods on [`Game`](super::Game).

use serde::{Deserialize, Serialize};

use crate::core::Coordinate;

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the turn's first coordinate.
    AwaitingFirstPick,
    /// First card is revealed; waiting for the second coordinate.
    AwaitingSecondPick { first: Coordinate },
    /// Both cards are revealed and ready to compare.
    Resolving {
        first: Coordinate,
        second: Coordinate,
    },
    /// Every slot is cleared; only the winner computation remains.
    GameOver,
}

impl TurnState {
    /// Has the game reached its terminal state?
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self, Self::GameOver)
    }
}

/// Outcome of comparing the two revealed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Equal symbols: both slots cleared, a pair scored, same player
    /// continues.
    Matched,
    /// Different symbols: both cards hidden again, turn passes on.
    Mismatched,
}
