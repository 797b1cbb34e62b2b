use serde::{Deserialize, Serialize};
use std::fmt;

/// A symbol shown on one reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbol {
    Cherry,
    Lemon,
    Star,
    Bell,
    Diamond,
    Seven,
}

impl Symbol {
    /// Every symbol, in wheel order.
    pub const ALL: [Symbol; 6] = [
        Symbol::Cherry,
        Symbol::Lemon,
        Symbol::Star,
        Symbol::Bell,
        Symbol::Diamond,
        Symbol::Seven,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Cherry => "CHERRY",
            Symbol::Lemon => "LEMON",
            Symbol::Star => "STAR",
            Symbol::Bell => "BELL",
            Symbol::Diamond => "DIAMOND",
            Symbol::Seven => "SEVEN",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three symbols displayed for one play.
pub type Reels = [Symbol; 3];
