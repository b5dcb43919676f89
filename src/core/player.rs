//! Players and the roster.
//!
//! ## PlayerId
//!
//! Type-safe 0-based index into the roster.
//!
//! ## Roster
//!
//! Ordered list of 2-6 players backed by `Vec` for O(1) access, indexable by
//! `PlayerId`. Scores live here; the engine awards a pair on every confirmed
//! match and never decrements.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::{MAX_PLAYERS, MIN_PLAYERS};

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use pelmanism::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player: display name plus running score.
///
/// Names are unique case-insensitively and non-blank; the console boundary
/// validates this before the roster is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: u32,
}

impl Player {
    /// Create a player with a zero score.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pairs matched so far.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Credit one matched pair.
    pub fn award_pair(&mut self) {
        self.score += 1;
    }
}

/// The ordered player list for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster from validated names, in seating order.
    pub fn new(names: Vec<String>) -> Self {
        assert!(names.len() >= MIN_PLAYERS, "Must have at least 2 players");
        assert!(names.len() <= MAX_PLAYERS, "At most 6 players supported");

        Self {
            players: names.into_iter().map(Player::new).collect(),
        }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a reference to a player.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &Player {
        &self.players[player.index()]
    }

    /// Get a mutable reference to a player.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player.index()]
    }

    /// Iterate over (PlayerId, &Player) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// The highest score among all players.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.players
            .iter()
            .map(Player::score)
            .max()
            .expect("roster is never empty")
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl IndexMut<PlayerId> for Roster {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Roster {
        Roster::new(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_award_pair_increments() {
        let mut player = Player::new("Ada");
        assert_eq!(player.score(), 0);

        player.award_pair();
        player.award_pair();
        assert_eq!(player.score(), 2);
    }

    #[test]
    fn test_roster_indexing() {
        let mut roster = roster(&["Ada", "Grace"]);

        assert_eq!(roster[PlayerId::new(0)].name(), "Ada");
        assert_eq!(roster[PlayerId::new(1)].name(), "Grace");

        roster[PlayerId::new(1)].award_pair();
        assert_eq!(roster[PlayerId::new(1)].score(), 1);
        assert_eq!(roster[PlayerId::new(0)].score(), 0);
    }

    #[test]
    fn test_max_score() {
        let mut roster = roster(&["Ada", "Grace", "Edsger"]);

        assert_eq!(roster.max_score(), 0);

        roster[PlayerId::new(1)].award_pair();
        roster[PlayerId::new(1)].award_pair();
        roster[PlayerId::new(2)].award_pair();

        assert_eq!(roster.max_score(), 2);
    }

    #[test]
    fn test_roster_iter_order() {
        let roster = roster(&["Ada", "Grace"]);
        let pairs: Vec<_> = roster.iter().map(|(id, p)| (id, p.name())).collect();

        assert_eq!(pairs, vec![(PlayerId::new(0), "Ada"), (PlayerId::new(1), "Grace")]);
    }

    #[test]
    #[should_panic(expected = "Must have at least 2 players")]
    fn test_roster_rejects_single_player() {
        let _ = roster(&["Ada"]);
    }

    #[test]
    #[should_panic(expected = "At most 6 players supported")]
    fn test_roster_rejects_seven_players() {
        let _ = roster(&["a", "b", "c", "d", "e", "f", "g"]);
    }

    #[test]
    fn test_player_serde() {
        let mut player = Player::new("Ada");
        player.award_pair();

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();

        assert_eq!(player, deserialized);
    }
}
