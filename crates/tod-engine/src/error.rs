//! Error types for the game engine.

use thiserror::Error;

use crate::category::Category;

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running a game.
///
/// Expired or corrupt persisted state is deliberately not represented
/// here: the store degrades it to "no saved session" instead.
#[derive(Debug, Error)]
pub enum GameError {
    /// The package catalog could not be read or parsed.
    #[error("package catalog unavailable: {reason}")]
    CatalogUnavailable {
        /// Underlying read or parse failure.
        reason: String,
    },

    /// A package's prompt resource failed to load; the deck keeps its
    /// prior state.
    #[error("failed to load cards for \"{package}\": {reason}")]
    ResourceLoad {
        /// Name of the affected package.
        package: String,
        /// Underlying read failure.
        reason: String,
    },

    /// The requested package id does not exist in the catalog.
    #[error("unknown package id: {0}")]
    UnknownPackage(u32),

    /// A game was started or reconciled with no packages selected.
    #[error("select at least one package")]
    EmptySelection,

    /// No selected package has any cards in the requested category,
    /// even after a reshuffle attempt.
    #[error("no {0} cards in any selected package")]
    EmptyCategory(Category),

    /// Pass was requested before any card had been drawn.
    #[error("draw a card before passing")]
    NoPriorDraw,

    /// The session snapshot or settings could not be written.
    #[error("failed to persist state: {0}")]
    Storage(String),
}
