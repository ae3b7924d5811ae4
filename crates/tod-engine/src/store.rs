//! Session and settings persistence.
//!
//! Two JSON slots in a state directory: the session snapshot and the
//! settings blob. Loads never fail outward — missing, unparseable, or
//! expired state degrades to "nothing saved".

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::deck::PackageDeck;
use crate::error::{GameError, GameResult};
use crate::session::Session;

/// Days after which a saved session is discarded.
pub const EXPIRY_DAYS: i64 = 7;

const SESSION_FILE: &str = "session.json";
const SETTINGS_FILE: &str = "settings.json";

/// Saved draw state for one package: card order and cursors, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSnapshot {
    /// Package id.
    pub id: u32,
    /// Truth cursor at capture time.
    pub truth_index: usize,
    /// Dare cursor at capture time.
    pub dare_index: usize,
    /// Truth cards in draw order.
    pub truth_cards: Vec<String>,
    /// Dare cards in draw order.
    pub dare_cards: Vec<String>,
}

impl PackageSnapshot {
    /// Capture a deck's current state.
    pub fn from_deck(deck: &PackageDeck) -> Self {
        Self {
            id: deck.id,
            truth_index: deck.index(Category::Truth),
            dare_index: deck.index(Category::Dare),
            truth_cards: deck.cards(Category::Truth).to_vec(),
            dare_cards: deck.cards(Category::Dare).to_vec(),
        }
    }

    /// Rebuild the deck exactly as saved, without reshuffling.
    pub fn into_deck(self) -> PackageDeck {
        PackageDeck::restore(
            self.id,
            self.truth_cards,
            self.dare_cards,
            self.truth_index,
            self.dare_index,
        )
    }
}

/// A point-in-time capture of the full session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// When the snapshot was written.
    pub timestamp: DateTime<Utc>,
    /// Round counter at capture time.
    pub current_round: u32,
    /// Package of the most recent draw, if any.
    pub last_used_package_id: Option<u32>,
    /// Category of the most recent draw, if any.
    pub last_card_type: Option<Category>,
    /// Ids of the active packages.
    pub selected_package_ids: Vec<u32>,
    /// Per-package deck state.
    pub package_states: Vec<PackageSnapshot>,
}

impl SessionSnapshot {
    /// Capture the given session as of now.
    pub fn capture(session: &Session) -> Self {
        Self {
            timestamp: Utc::now(),
            current_round: session.current_round,
            last_used_package_id: session.last_draw.map(|l| l.package_id),
            last_card_type: session.last_draw.map(|l| l.category),
            selected_package_ids: session.active_ids(),
            package_states: session.decks().iter().map(PackageSnapshot::from_deck).collect(),
        }
    }

    /// Whether the snapshot is older than the expiry window.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.timestamp > Duration::days(EXPIRY_DAYS)
    }

    /// Saved state for a package, if the snapshot contains it.
    pub fn package_state(&self, id: u32) -> Option<&PackageSnapshot> {
        self.package_states.iter().find(|p| p.id == id)
    }
}

/// Persisted host settings: presentation flags and the remembered
/// package selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether the host should render in dark mode.
    pub dark_mode: bool,
    /// Package ids checked during the last setup.
    pub selected_package_ids: Vec<u32>,
}

/// File-backed store for the session and settings slots.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at the given directory. The directory is
    /// created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Persist a snapshot, overwriting any previous one.
    pub fn save(&self, snapshot: &SessionSnapshot) -> GameResult<()> {
        self.write_slot(SESSION_FILE, snapshot)
    }

    /// Load the saved session, if present, parseable, and fresh.
    ///
    /// An expired snapshot is deleted and treated as absent. Read and
    /// parse failures also degrade to `None`.
    pub fn load(&self) -> Option<SessionSnapshot> {
        let path = self.dir.join(SESSION_FILE);
        let raw = fs::read_to_string(&path).ok()?;
        let snapshot: SessionSnapshot = serde_json::from_str(&raw).ok()?;
        if snapshot.is_expired(Utc::now()) {
            let _ = fs::remove_file(&path);
            return None;
        }
        Some(snapshot)
    }

    /// Delete the saved session, if any.
    pub fn clear(&self) {
        let _ = fs::remove_file(self.dir.join(SESSION_FILE));
    }

    /// Load settings, falling back to defaults when absent or unreadable.
    pub fn load_settings(&self) -> Settings {
        fs::read_to_string(self.dir.join(SETTINGS_FILE))
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Persist settings, overwriting the previous blob.
    pub fn save_settings(&self, settings: &Settings) -> GameResult<()> {
        self.write_slot(SETTINGS_FILE, settings)
    }

    fn write_slot<T: Serialize>(&self, file: &str, value: &T) -> GameResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| GameError::Storage(e.to_string()))?;
        let json = serde_json::to_string_pretty(value).map_err(|e| GameError::Storage(e.to_string()))?;
        fs::write(self.dir.join(file), json).map_err(|e| GameError::Storage(e.to_string()))
    }
}
