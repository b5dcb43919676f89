//! The interactive session: banner, setup prompts, and the game itself.

use log::debug;

use crate::core::{GameRng, GridDims, NameRegistry, Roster, MAX_CELLS, MAX_PLAYERS, MIN_PLAYERS};
use crate::engine::Game;
use crate::grid::Grid;

use super::Console;

/// Run one full interactive session over the given console.
///
/// Startup sequence: welcome banner, start confirmation, player count,
/// unique player names, grid dimensions, then the game loop to completion.
/// Both the "declined to start" and "game completed" paths return normally.
pub fn run_session(console: &mut dyn Console, mut rng: GameRng) {
    print_welcome(console);

    if !console.prompt_yes_no("Do you want to start the game?") {
        console.say("Goodbye!");
        return;
    }

    console.say("How many players?");
    let player_count = console.prompt_int_in_range(MIN_PLAYERS, MAX_PLAYERS);

    let mut registry = NameRegistry::default();
    let mut names = Vec::with_capacity(player_count);
    for number in 1..=player_count {
        loop {
            console.say(&format!("Enter name for player {number}:"));
            match registry.claim(&console.prompt_trimmed_string()) {
                Ok(name) => {
                    names.push(name);
                    break;
                }
                Err(err) => console.say(&format!("Error: {err}.")),
            }
        }
    }

    let dims = loop {
        console.say("Insert height:");
        let height = console.prompt_int_in_range(1, MAX_CELLS);
        console.say("Insert width:");
        let width = console.prompt_int_in_range(1, MAX_CELLS);
        match GridDims::new(height, width) {
            Ok(dims) => break dims,
            Err(err) => console.say(&format!("Invalid grid dimensions: {err}.")),
        }
    };

    debug!(
        "starting a {}x{} game with {player_count} players",
        dims.height(),
        dims.width()
    );

    let grid = Grid::new(dims, &mut rng);
    let mut game = Game::new(Roster::new(names), grid);
    game.play(console);
}

fn print_welcome(console: &mut dyn Console) {
    console.say("******************************");
    console.say("           MEMORY             ");
    console.say("******************************");
    console.say("");
    console.say("Flip two cards per turn.");
    console.say("If they match, you score a point");
    console.say("and play again.");
    console.say("Most pairs wins!");
    console.say("----------------------------------");
}
