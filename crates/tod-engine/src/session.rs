//! Mutable game state: round counter, last draw, and the active decks.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::deck::PackageDeck;

/// The package and category of the most recent draw, used by pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastDraw {
    /// Package the card came from.
    pub package_id: u32,
    /// Category that was drawn.
    pub category: Category,
}

/// Full mutable state of a running game.
///
/// Invariant: whenever `last_draw` is set, its package id refers to one
/// of the active decks. [`Session::set_decks`] enforces this when the
/// deck set changes.
#[derive(Debug, Clone)]
pub struct Session {
    /// Current round number, starting at 1. Draws advance it; pass does not.
    pub current_round: u32,
    /// Most recent draw, if any.
    pub last_draw: Option<LastDraw>,
    decks: Vec<PackageDeck>,
}

impl Session {
    /// Create a fresh session at round 1 with no decks.
    pub fn new() -> Self {
        Self {
            current_round: 1,
            last_draw: None,
            decks: Vec::new(),
        }
    }

    /// The active decks, in selection order.
    pub fn decks(&self) -> &[PackageDeck] {
        &self.decks
    }

    /// Mutable access to the active decks.
    pub fn decks_mut(&mut self) -> &mut [PackageDeck] {
        &mut self.decks
    }

    /// Look up an active deck by package id.
    pub fn deck(&self, id: u32) -> Option<&PackageDeck> {
        self.decks.iter().find(|d| d.id == id)
    }

    /// Mutable lookup of an active deck by package id.
    pub fn deck_mut(&mut self, id: u32) -> Option<&mut PackageDeck> {
        self.decks.iter_mut().find(|d| d.id == id)
    }

    /// Ids of the active decks, in selection order.
    pub fn active_ids(&self) -> Vec<u32> {
        self.decks.iter().map(|d| d.id).collect()
    }

    /// Replace the active deck set, clearing `last_draw` if its package
    /// is no longer present. Returns whether `last_draw` was cleared.
    pub fn set_decks(&mut self, decks: Vec<PackageDeck>) -> bool {
        self.decks = decks;
        if let Some(last) = self.last_draw
            && self.deck(last.package_id).is_none()
        {
            self.last_draw = None;
            return true;
        }
        false
    }

    /// Remove and return the deck set, leaving the session empty.
    pub(crate) fn take_decks(&mut self) -> Vec<PackageDeck> {
        std::mem::take(&mut self.decks)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(id: u32) -> PackageDeck {
        PackageDeck::from_cards(id, vec!["t".into()], vec!["d".into()])
    }

    #[test]
    fn fresh_session() {
        let s = Session::new();
        assert_eq!(s.current_round, 1);
        assert!(s.last_draw.is_none());
        assert!(s.decks().is_empty());
    }

    #[test]
    fn deck_lookup_by_id() {
        let mut s = Session::new();
        s.set_decks(vec![deck(1), deck(3)]);
        assert!(s.deck(3).is_some());
        assert!(s.deck(2).is_none());
        assert_eq!(s.active_ids(), vec![1, 3]);
    }

    #[test]
    fn replacing_decks_keeps_last_draw_for_retained_package() {
        let mut s = Session::new();
        s.set_decks(vec![deck(1), deck(2)]);
        s.last_draw = Some(LastDraw {
            package_id: 1,
            category: Category::Truth,
        });

        let cleared = s.set_decks(vec![deck(1)]);
        assert!(!cleared);
        assert!(s.last_draw.is_some());
    }

    #[test]
    fn replacing_decks_clears_last_draw_for_dropped_package() {
        let mut s = Session::new();
        s.set_decks(vec![deck(1), deck(2)]);
        s.last_draw = Some(LastDraw {
            package_id: 2,
            category: Category::Dare,
        });

        let cleared = s.set_decks(vec![deck(1)]);
        assert!(cleared);
        assert!(s.last_draw.is_none());
    }
}
