//! # pelmanism
//!
//! A turn-based console memory matching game for 2-6 players.
//!
//! Players take turns revealing two cells of a hidden grid. Matching
//! symbols clear the pair, score a point, and grant another turn;
//! non-matches hide both cards again and pass the turn round-robin. The
//! game ends when every cell is cleared, and the player(s) with the most
//! pairs win.
//!
//! ## Design Principles
//!
//! 1. **Injected boundaries**: all text I/O goes through the `Console`
//!    trait and all randomness through `GameRng`, both passed in
//!    explicitly. Tests script the console and seed the RNG.
//!
//! 2. **Validate at the edge**: dimensions and names are checked once, at
//!    the console boundary (`GridDims`, `NameRegistry`). The engine only
//!    ever sees valid values and has no recoverable error paths.
//!
//! 3. **Explicit state**: cell slots are `Option<Card>` (cleared vs. in
//!    play, exhaustively matched) and the turn loop is an explicit state
//!    machine with pure, individually testable transitions.
//!
//! ## Modules
//!
//! - `core`: cards and the symbol alphabet, coordinates, players, RNG,
//!   setup validation
//! - `grid`: grid construction (symbol pairing + shuffle), flip/clear
//!   operations, text rendering
//! - `engine`: the turn/match state machine, scoring, winner computation
//! - `console`: the interaction boundary trait, its stdin/stdout
//!   implementation, and the interactive session

pub mod console;
pub mod core;
pub mod engine;
pub mod grid;

// Re-export commonly used types
pub use crate::console::{run_session, Console, StdConsole};
pub use crate::core::{
    Card, Coordinate, GameRng, GridDims, NameRegistry, Player, PlayerId, Roster, SetupError,
    Symbol, MAX_CELLS, MAX_PLAYERS, MIN_PLAYERS,
};
pub use crate::engine::{Game, GameResult, Resolution, TurnState};
pub use crate::grid::Grid;
