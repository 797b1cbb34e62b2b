//! Reel symbols and the sequencer that picks them.

mod sequencer;
mod types;

pub use sequencer::SymbolSequencer;
pub use types::{Reels, Symbol};
