//! The game grid: a 2D arrangement of optional cards.
//!
//! ## Construction
//!
//! Symbols are dealt from the ordered alphabet, one per pair, into adjacent
//! row-major positions, then the whole layout is permuted by an unbiased
//! shuffle from the injected [`GameRng`]. The result is a uniformly random
//! arrangement with exactly two cells per symbol.
//!
//! ## Cell slots
//!
//! A slot holds `Some(Card)` while the card is in play and becomes `None`
//! permanently once its pair is matched. Emptiness is distinct from
//! face-down: cleared slots render blank and are never pickable again.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Card, Coordinate, GameRng, GridDims, Symbol};

/// A `height x width` grid of cell slots, mutated in place during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Row-major; `None` marks a cleared slot.
    cells: Vec<Option<Card>>,
}

impl Grid {
    /// Build a shuffled grid for the given dimensions.
    ///
    /// `dims` already guarantees an even cell count within the alphabet's
    /// capacity, so construction cannot fail.
    #[must_use]
    pub fn new(dims: GridDims, rng: &mut GameRng) -> Self {
        let mut cells = Vec::with_capacity(dims.cell_count());
        for pair in 0..dims.pair_count() {
            let symbol = Symbol::nth(pair);
            cells.push(Some(Card::new(symbol)));
            cells.push(Some(Card::new(symbol)));
        }

        rng.shuffle(&mut cells);

        debug!(
            "dealt {} symbol pairs into a {}x{} grid",
            dims.pair_count(),
            dims.height(),
            dims.width()
        );

        Self {
            height: dims.height(),
            width: dims.width(),
            cells,
        }
    }

    /// Grid height in rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid width in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Total number of slots, cleared or not.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Is the coordinate inside the grid?
    #[must_use]
    pub const fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    fn index(&self, coord: Coordinate) -> usize {
        assert!(self.in_bounds(coord), "coordinate out of grid bounds");
        coord.row * self.width + coord.col
    }

    /// The card at `coord`, or `None` if the slot has been cleared.
    #[must_use]
    pub fn card(&self, coord: Coordinate) -> Option<&Card> {
        self.cells[self.index(coord)].as_ref()
    }

    /// Toggle the face-up state of the card at `coord`.
    ///
    /// Callers only flip non-empty slots; the turn machine guarantees this
    /// by requesting coordinates through [`Grid::is_pickable`].
    pub fn flip(&mut self, coord: Coordinate) {
        let idx = self.index(coord);
        self.cells[idx]
            .as_mut()
            .expect("cannot flip a cleared slot")
            .flip();
    }

    /// Permanently empty the slot at `coord` after its pair was matched.
    pub fn clear(&mut self, coord: Coordinate) {
        let idx = self.index(coord);
        assert!(self.cells[idx].is_some(), "slot already cleared");
        self.cells[idx] = None;
    }

    /// The pick-validity predicate exposed to the turn machine: the
    /// coordinate addresses a cell that is in bounds, non-empty, and
    /// currently face-down.
    #[must_use]
    pub fn is_pickable(&self, coord: Coordinate) -> bool {
        if !self.in_bounds(coord) {
            return false;
        }
        matches!(self.card(coord), Some(card) if !card.is_face_up())
    }

    /// Have all slots been cleared?
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of cards still in play.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterate over rows of slots, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Card>]> {
        self.cells.chunks(self.width)
    }
}

/// Renders the grid as a bordered table with 1-based row and column indices.
/// Face-down cards show `!`, cleared slots are blank.
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "-".repeat(self.width * 4 + 1);

        write!(f, "    ")?;
        for col in 0..self.width {
            write!(f, " {:2} ", col + 1)?;
        }
        writeln!(f)?;

        for (row, slots) in self.rows().enumerate() {
            writeln!(f, "    {rule}")?;
            write!(f, " {:2} |", row + 1)?;
            for slot in slots {
                match slot {
                    Some(card) if card.is_face_up() => write!(f, " {} |", card.symbol())?,
                    Some(_) => write!(f, " ! |")?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
        }

        write!(f, "    {rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(height: usize, width: usize, seed: u64) -> Grid {
        let dims = GridDims::new(height, width).unwrap();
        Grid::new(dims, &mut GameRng::new(seed))
    }

    fn coords(grid: &Grid) -> Vec<Coordinate> {
        (0..grid.height())
            .flat_map(|row| (0..grid.width()).map(move |col| Coordinate::new(row, col)))
            .collect()
    }

    #[test]
    fn test_construction_fills_every_slot_face_down() {
        let grid = grid(4, 5, 42);

        assert_eq!(grid.cell_count(), 20);
        assert_eq!(grid.remaining(), 20);
        for coord in coords(&grid) {
            let card = grid.card(coord).expect("no slot starts cleared");
            assert!(!card.is_face_up());
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = grid(4, 4, 7);
        let b = grid(4, 4, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_flip_and_flip_back() {
        let mut grid = grid(2, 2, 1);
        let coord = Coordinate::new(0, 0);

        grid.flip(coord);
        assert!(grid.card(coord).unwrap().is_face_up());
        assert!(!grid.is_pickable(coord));

        grid.flip(coord);
        assert!(!grid.card(coord).unwrap().is_face_up());
        assert!(grid.is_pickable(coord));
    }

    #[test]
    fn test_clear_is_permanent() {
        let mut grid = grid(2, 2, 1);
        let coord = Coordinate::new(1, 1);

        grid.clear(coord);

        assert!(grid.card(coord).is_none());
        assert!(!grid.is_pickable(coord));
        assert_eq!(grid.remaining(), 3);
    }

    #[test]
    #[should_panic(expected = "cannot flip a cleared slot")]
    fn test_flip_cleared_slot_panics() {
        let mut grid = grid(2, 2, 1);
        grid.clear(Coordinate::new(0, 0));
        grid.flip(Coordinate::new(0, 0));
    }

    #[test]
    fn test_is_pickable_rejects_out_of_bounds() {
        let grid = grid(2, 2, 1);
        assert!(!grid.is_pickable(Coordinate::new(2, 0)));
        assert!(!grid.is_pickable(Coordinate::new(0, 2)));
    }

    #[test]
    fn test_is_cleared_after_clearing_all() {
        let mut grid = grid(1, 2, 1);
        assert!(!grid.is_cleared());

        grid.clear(Coordinate::new(0, 0));
        grid.clear(Coordinate::new(0, 1));

        assert!(grid.is_cleared());
        assert_eq!(grid.remaining(), 0);
    }

    #[test]
    fn test_display_masks_and_blanks() {
        let mut grid = grid(2, 2, 3);
        grid.flip(Coordinate::new(0, 0));
        grid.clear(Coordinate::new(1, 1));

        let rendered = format!("{grid}");
        let revealed = grid.card(Coordinate::new(0, 0)).unwrap().symbol();

        // Column header, a revealed symbol, a mask, and a blank slot.
        assert!(rendered.contains("  1   2 "));
        assert!(rendered.contains(&format!(" {revealed} |")));
        assert!(rendered.contains(" ! |"));
        assert!(rendered.contains("   |"));
    }
}
