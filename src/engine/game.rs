//! The game orchestrator: players, grid, and the turn machine.

use log::debug;
use smallvec::SmallVec;

use crate::console::Console;
use crate::core::{Coordinate, PlayerId, Roster};
use crate::grid::Grid;

use super::turn::{Resolution, TurnState};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Multiple players tied at the maximum score.
    ///
    /// SmallVec keeps the winner set inline: with at most six players a tie
    /// never allocates.
    Winners(SmallVec<[PlayerId; 6]>),
}

impl GameResult {
    /// Everyone whose score equals the roster's maximum.
    #[must_use]
    pub fn compute(roster: &Roster) -> Self {
        let max = roster.max_score();
        let winners: SmallVec<[PlayerId; 6]> = roster
            .iter()
            .filter(|(_, player)| player.score() == max)
            .map(|(id, _)| id)
            .collect();

        match winners.as_slice() {
            [single] => GameResult::Winner(*single),
            _ => GameResult::Winners(winners),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// One running game: the roster, the grid, and whose turn it is.
///
/// The pick/resolve transitions are pure with respect to I/O and can be
/// driven directly in tests; [`Game::play`] drives them through a
/// [`Console`] to completion.
#[derive(Clone, Debug)]
pub struct Game {
    roster: Roster,
    grid: Grid,
    current: PlayerId,
    state: TurnState,
}

impl Game {
    /// Start a game with the first roster player to move.
    #[must_use]
    pub fn new(roster: Roster, grid: Grid) -> Self {
        Self {
            roster,
            grid,
            current: PlayerId::new(0),
            state: TurnState::AwaitingFirstPick,
        }
    }

    /// The grid as it currently stands.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The players in seating order.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Current position in the turn machine.
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    // === Transitions ===

    /// Reveal the turn's first card.
    ///
    /// Requires `AwaitingFirstPick` and a pickable coordinate.
    pub fn pick_first(&mut self, coord: Coordinate) {
        assert!(
            matches!(self.state, TurnState::AwaitingFirstPick),
            "pick_first requires the AwaitingFirstPick state"
        );
        assert!(
            self.grid.is_pickable(coord),
            "pick must address a non-empty, face-down cell"
        );

        self.grid.flip(coord);
        self.state = TurnState::AwaitingSecondPick { first: coord };
    }

    /// Reveal the turn's second card.
    ///
    /// The same pickability predicate applies; the first card is face-up by
    /// now, so the two picks necessarily address different cells.
    pub fn pick_second(&mut self, coord: Coordinate) {
        let first = match self.state {
            TurnState::AwaitingSecondPick { first } => first,
            _ => panic!("pick_second requires the AwaitingSecondPick state"),
        };
        assert!(
            self.grid.is_pickable(coord),
            "pick must address a non-empty, face-down cell"
        );

        self.grid.flip(coord);
        self.state = TurnState::Resolving {
            first,
            second: coord,
        };
    }

    /// Compare the two revealed cards and settle the turn.
    ///
    /// A match clears both slots, scores a pair, and keeps the turn; a
    /// mismatch hides both cards again and passes the turn round-robin.
    /// Afterwards the game is either back at `AwaitingFirstPick` or, with
    /// the grid empty, at `GameOver`.
    pub fn resolve(&mut self) -> Resolution {
        let (first, second) = match self.state {
            TurnState::Resolving { first, second } => (first, second),
            _ => panic!("resolve requires the Resolving state"),
        };

        let a = *self.grid.card(first).expect("revealed slot cannot be empty");
        let b = *self.grid.card(second).expect("revealed slot cannot be empty");
        debug_assert!(a.is_face_up() && b.is_face_up());

        let resolution = if a.symbol() == b.symbol() {
            self.grid.clear(first);
            self.grid.clear(second);
            self.roster[self.current].award_pair();
            debug!(
                "{} matched a pair at {first} and {second}, score {}",
                self.roster[self.current].name(),
                self.roster[self.current].score()
            );
            Resolution::Matched
        } else {
            self.grid.flip(first);
            self.grid.flip(second);
            let next = (self.current.index() + 1) % self.roster.player_count();
            self.current = PlayerId::new(next as u8);
            debug!("no match, turn passes to {}", self.roster[self.current].name());
            Resolution::Mismatched
        };

        self.state = if self.grid.is_cleared() {
            TurnState::GameOver
        } else {
            TurnState::AwaitingFirstPick
        };

        resolution
    }

    /// The winner set, available once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.state.is_over() {
            Some(GameResult::compute(&self.roster))
        } else {
            None
        }
    }

    // === Driver ===

    /// Drive the turn machine to completion over the console boundary.
    pub fn play(&mut self, console: &mut dyn Console) {
        while !self.state.is_over() {
            console.say(&format!("Turn of {}", self.roster[self.current].name()));
            console.render(&self.grid);

            let first = self.request_pick(console);
            self.pick_first(first);
            console.render(&self.grid);

            let second = self.request_pick(console);
            self.pick_second(second);
            console.render(&self.grid);

            match self.resolve() {
                Resolution::Matched => console.say("Match!"),
                Resolution::Mismatched => console.say("No match."),
            }
        }

        self.announce_result(console);
    }

    /// Ask the boundary for coordinates until one addresses a pickable cell.
    fn request_pick(&self, console: &mut dyn Console) -> Coordinate {
        loop {
            let coord = console.prompt_coordinate(self.grid.height(), self.grid.width());
            if self.grid.is_pickable(coord) {
                return coord;
            }
            console.say("That cell is not available, pick a face-down card.");
        }
    }

    fn announce_result(&self, console: &mut dyn Console) {
        let max = self.roster.max_score();
        console.say("Game over!");

        match self.result().expect("game is over") {
            GameResult::Winner(p) => {
                console.say(&format!(
                    "Winner: {} with {} pairs.",
                    self.roster[p].name(),
                    max
                ));
            }
            GameResult::Winners(ps) => {
                let names: Vec<&str> = ps.iter().map(|&p| self.roster[p].name()).collect();
                console.say(&format!("Winners: {} with {} pairs.", names.join(" "), max));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, GridDims};

    fn roster(names: &[&str]) -> Roster {
        Roster::new(names.iter().map(|n| n.to_string()).collect())
    }

    fn small_game(seed: u64) -> Game {
        let dims = GridDims::new(2, 2).unwrap();
        let grid = Grid::new(dims, &mut GameRng::new(seed));
        Game::new(roster(&["Ada", "Grace"]), grid)
    }

    #[test]
    fn test_new_game_starts_with_first_player() {
        let game = small_game(42);
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.state(), TurnState::AwaitingFirstPick);
        assert!(game.result().is_none());
    }

    #[test]
    fn test_pick_first_reveals_and_advances_state() {
        let mut game = small_game(42);
        let coord = Coordinate::new(0, 0);

        game.pick_first(coord);

        assert!(game.grid().card(coord).unwrap().is_face_up());
        assert_eq!(game.state(), TurnState::AwaitingSecondPick { first: coord });
    }

    #[test]
    #[should_panic(expected = "pick must address a non-empty, face-down cell")]
    fn test_second_pick_cannot_reuse_first_cell() {
        let mut game = small_game(42);
        game.pick_first(Coordinate::new(0, 0));
        game.pick_second(Coordinate::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "resolve requires the Resolving state")]
    fn test_resolve_outside_resolving_panics() {
        let mut game = small_game(42);
        let _ = game.resolve();
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let tied = GameResult::Winners([PlayerId::new(0), PlayerId::new(2)].into_iter().collect());
        assert!(tied.is_winner(PlayerId::new(0)));
        assert!(!tied.is_winner(PlayerId::new(1)));
        assert!(tied.is_winner(PlayerId::new(2)));
    }
}
