//! Rotating symbol picker.

use std::sync::{Mutex, PoisonError};

use super::types::{Reels, Symbol};

/// Picks reel symbols from a single rotating cursor over [`Symbol::ALL`].
///
/// The cursor moves one position per symbol drawn, so consecutive plays do not
/// restart from the same symbol.
#[derive(Debug, Default)]
pub struct SymbolSequencer {
    cursor: Mutex<usize>,
}

impl SymbolSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the reels for one play.
    ///
    /// A win shows one symbol three times. A loss shows three consecutive
    /// symbols, redrawing the third when it would match the first so a loss is
    /// never rendered as three of a kind.
    pub fn next(&self, is_win: bool) -> Reels {
        let mut cursor = self.cursor.lock().unwrap_or_else(PoisonError::into_inner);
        let mut draw = || {
            let symbol = Symbol::ALL[*cursor % Symbol::ALL.len()];
            *cursor = (*cursor + 1) % Symbol::ALL.len();
            symbol
        };

        let first = draw();
        if is_win {
            return [first, first, first];
        }
        let second = draw();
        let mut third = draw();
        if third == first {
            third = draw();
        }
        [first, second, third]
    }

    /// Index of the next symbol to be drawn.
    pub fn position(&self) -> usize {
        *self.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
