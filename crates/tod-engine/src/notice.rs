//! User-facing notices emitted by the engine for the host to display.

use std::fmt;

use crate::category::Category;

/// A message the host should surface to the player.
///
/// The engine never prints; it queues these and the host drains them
/// after each operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Every active deck ran out of cards in a category; all of them
    /// were reshuffled.
    CategoryExhausted(Category),
    /// The last-used package had no cards left in the passed category,
    /// so the pass drew from another package instead.
    PassFallback(Category),
    /// The package of the last draw was deselected; pass is unavailable
    /// until the next draw.
    PackageRemoved(String),
    /// A package's prompt files could not be loaded; it was left out of
    /// the selection.
    PackageLoadFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryExhausted(category) => {
                write!(f, "Every {category} card has been played! Reshuffling...")
            }
            Self::PassFallback(category) => {
                write!(f, "No {category} cards left in that package; drawing from another.")
            }
            Self::PackageRemoved(name) => {
                write!(f, "\"{name}\" was removed; pass is no longer available.")
            }
            Self::PackageLoadFailed(name) => {
                write!(f, "Could not load the cards for \"{name}\".")
            }
        }
    }
}
