//! Per-package draw state: shuffled truth and dare queues with cursors.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{GameError, GameResult};

/// Mutable draw state for one selected package.
///
/// Each category holds a shuffled card sequence and a cursor: cards
/// before the cursor are consumed, cards at or after it are available
/// this cycle. The cursor never exceeds the sequence length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDeck {
    /// Id of the package this deck belongs to.
    pub id: u32,
    truth_cards: Vec<String>,
    dare_cards: Vec<String>,
    truth_index: usize,
    dare_index: usize,
}

impl PackageDeck {
    /// Create an empty deck for a package.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            truth_cards: Vec::new(),
            dare_cards: Vec::new(),
            truth_index: 0,
            dare_index: 0,
        }
    }

    /// Build a deck directly from card lists, cursors at the start.
    pub fn from_cards(id: u32, truth_cards: Vec<String>, dare_cards: Vec<String>) -> Self {
        Self {
            id,
            truth_cards,
            dare_cards,
            truth_index: 0,
            dare_index: 0,
        }
    }

    /// Rebuild a deck exactly as captured in a snapshot: card order and
    /// cursors are taken verbatim, with no reshuffle.
    pub fn restore(
        id: u32,
        truth_cards: Vec<String>,
        dare_cards: Vec<String>,
        truth_index: usize,
        dare_index: usize,
    ) -> Self {
        Self {
            id,
            truth_cards,
            dare_cards,
            truth_index,
            dare_index,
        }
    }

    /// Load both prompt files, shuffle each category independently, and
    /// reset the cursors.
    ///
    /// Both files are read before any state is overwritten, so a failed
    /// load leaves the deck exactly as it was.
    pub fn populate_fresh(
        &mut self,
        package: &str,
        truth_path: &Path,
        dare_path: &Path,
        rng: &mut StdRng,
    ) -> GameResult<()> {
        let mut truth = read_prompts(package, truth_path)?;
        let mut dare = read_prompts(package, dare_path)?;
        truth.shuffle(rng);
        dare.shuffle(rng);
        self.truth_cards = truth;
        self.dare_cards = dare;
        self.truth_index = 0;
        self.dare_index = 0;
        Ok(())
    }

    /// Cards not yet consumed in the given category.
    pub fn remaining(&self, category: Category) -> usize {
        let (cards, index) = self.queue(category);
        cards.len() - index
    }

    /// Total cards in the category, consumed or not.
    pub fn total(&self, category: Category) -> usize {
        self.queue(category).0.len()
    }

    /// The card sequence for a category, in draw order.
    pub fn cards(&self, category: Category) -> &[String] {
        self.queue(category).0
    }

    /// The consumption cursor for a category.
    pub fn index(&self, category: Category) -> usize {
        self.queue(category).1
    }

    /// Take the next available card of a category, advancing the cursor.
    ///
    /// Returns `None` when the category is exhausted.
    pub fn consume_next(&mut self, category: Category) -> Option<&str> {
        let (cards, index) = self.queue_mut(category);
        let card = cards.get(*index)?;
        *index += 1;
        Some(card)
    }

    /// Reset the category's cursor and reshuffle its cards in place.
    pub fn reshuffle(&mut self, category: Category, rng: &mut StdRng) {
        let (cards, index) = self.queue_mut(category);
        *index = 0;
        cards.shuffle(rng);
    }

    fn queue(&self, category: Category) -> (&[String], usize) {
        match category {
            Category::Truth => (&self.truth_cards, self.truth_index),
            Category::Dare => (&self.dare_cards, self.dare_index),
        }
    }

    fn queue_mut(&mut self, category: Category) -> (&mut Vec<String>, &mut usize) {
        match category {
            Category::Truth => (&mut self.truth_cards, &mut self.truth_index),
            Category::Dare => (&mut self.dare_cards, &mut self.dare_index),
        }
    }
}

/// Read a prompt file into trimmed, non-empty lines.
fn read_prompts(package: &str, path: &Path) -> GameResult<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| GameError::ResourceLoad {
        package: package.to_string(),
        reason: e.to_string(),
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
