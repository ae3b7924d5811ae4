//! Card-selection and session-persistence engine for truth-or-dare games.
//!
//! Draws prompts from user-selected content packages with weighted random
//! selection and no replacement, supports a pass action that repeats the
//! last draw's source, reconciles package-set changes mid-game, and
//! persists the full session after every state change so a game survives
//! restarts (snapshots expire after seven days).
//!
//! The engine never renders anything: a host layer calls [`GameEngine`]
//! operations and displays the returned cards and [`Notice`]s.

pub mod catalog;
pub mod category;
pub mod config;
pub mod deck;
pub mod engine;
pub mod error;
pub mod notice;
mod reconcile;
pub mod session;
pub mod store;

pub use catalog::{ContentCatalog, PackageDescriptor};
pub use category::Category;
pub use config::GameConfig;
pub use deck::PackageDeck;
pub use engine::{DrawnCard, GameEngine};
pub use error::{GameError, GameResult};
pub use notice::Notice;
pub use session::{LastDraw, Session};
pub use store::{SessionSnapshot, SessionStore, Settings};
