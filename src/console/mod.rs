//! The console interaction boundary.
//!
//! All text I/O goes through the [`Console`] trait, injected into the
//! session and the play loop. The engine never touches stdin/stdout
//! directly, so tests drive it with a scripted implementation while the
//! binary uses [`StdConsole`].
//!
//! All "bad input" retry behavior lives here: every prompt re-prompts
//! indefinitely until it can return a valid value, and nothing invalid ever
//! reaches the engine.

pub mod session;
pub mod stdio;

use crate::core::Coordinate;
use crate::grid::Grid;

pub use session::run_session;
pub use stdio::StdConsole;

/// The interaction boundary the engine calls through.
pub trait Console {
    /// Block until the user supplies an integer in `[min, max]`,
    /// re-prompting indefinitely on invalid input.
    fn prompt_int_in_range(&mut self, min: usize, max: usize) -> usize;

    /// Block until the user supplies a non-blank string; returns it trimmed.
    fn prompt_trimmed_string(&mut self) -> String;

    /// Ask a yes/no question, re-prompting until `y` or `n`.
    fn prompt_yes_no(&mut self, message: &str) -> bool;

    /// Print the current grid state.
    fn render(&mut self, grid: &Grid);

    /// Print one line of game text.
    fn say(&mut self, message: &str);

    /// Prompt for a grid coordinate.
    ///
    /// Users answer with 1-based rows and columns, each validated via
    /// [`Console::prompt_int_in_range`]; the returned coordinate is 0-based.
    fn prompt_coordinate(&mut self, height: usize, width: usize) -> Coordinate {
        self.say("Insert row:");
        let row = self.prompt_int_in_range(1, height) - 1;
        self.say("Insert column:");
        let col = self.prompt_int_in_range(1, width) - 1;
        Coordinate::new(row, col)
    }
}
