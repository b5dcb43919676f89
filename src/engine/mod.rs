//! The turn/match engine.
//!
//! ## Key Types
//!
//! - `TurnState`: explicit finite-state machine for one turn
//! - `Resolution`: match vs. no-match outcome
//! - `Game`: roster + grid + current player, with pure transition methods
//!   and a console-driven play loop
//! - `GameResult`: the winner set at game end

pub mod game;
pub mod turn;

pub use game::{Game, GameResult};
pub use turn::{Resolution, TurnState};
