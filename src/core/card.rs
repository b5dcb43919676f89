//! Cards and the symbol alphabet.
//!
//! Every card carries one `Symbol` from an ordered alphabet of distinct
//! printable characters. The alphabet starts at `'"'` (ASCII 34) and runs
//! through `'~'` (ASCII 126), giving 93 symbols. Since each symbol is dealt
//! into exactly two cells, the alphabet fixes the maximum grid size at
//! 186 cells.

use serde::{Deserialize, Serialize};

/// One symbol from the ordered alphabet.
///
/// Symbols are compared for equality when resolving a pick pair; the engine
/// never interprets them beyond that.
///
/// ```
/// use pelmanism::core::Symbol;
///
/// assert_eq!(Symbol::nth(0).as_char(), '"');
/// assert_eq!(Symbol::nth(Symbol::ALPHABET_LEN - 1).as_char(), '~');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(char);

impl Symbol {
    /// First symbol of the alphabet.
    pub const FIRST: char = '"';

    /// Number of distinct symbols: `'"'` through `'~'` inclusive.
    pub const ALPHABET_LEN: usize = ('~' as usize) - ('"' as usize) + 1;

    /// Get the `index`-th symbol of the alphabet.
    ///
    /// Grid construction walks the alphabet in order, one symbol per pair.
    #[must_use]
    pub fn nth(index: usize) -> Self {
        assert!(index < Self::ALPHABET_LEN, "symbol index out of alphabet");
        let code = Self::FIRST as u32 + index as u32;
        Self(char::from_u32(code).expect("alphabet stays within printable ASCII"))
    }

    /// Get the printable character for this symbol.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single grid cell's card: a symbol plus a face-up flag.
///
/// Cards are created face-down during grid construction and their symbol
/// never changes afterwards. A matched card is not flipped away - its whole
/// slot is cleared by the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    symbol: Symbol,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            face_up: false,
        }
    }

    /// The card's symbol.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Is the card currently face-up?
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Toggle the face-up state.
    ///
    /// Flip is symmetric: a non-match resolution flips each involved card
    /// exactly twice, once to reveal and once to hide.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }
}
