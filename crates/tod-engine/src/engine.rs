//! The draw engine: weighted selection without replacement, pass,
//! reconciliation, and persistence after every mutation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::ContentCatalog;
use crate::category::Category;
use crate::config::GameConfig;
use crate::deck::PackageDeck;
use crate::error::{GameError, GameResult};
use crate::notice::Notice;
use crate::reconcile::merge_selection;
use crate::session::{LastDraw, Session};
use crate::store::{SessionSnapshot, SessionStore};

/// A successfully drawn card, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnCard {
    /// The prompt text.
    pub text: String,
    /// Name of the package it came from.
    pub package_name: String,
    /// Category it was drawn from.
    pub category: Category,
}

/// One engine instance drives one game.
///
/// Every operation that mutates the session persists a snapshot before
/// returning, so a crash loses at most an in-flight display transition,
/// never a completed action. Notices accumulate in a queue the host
/// drains with [`GameEngine::take_notices`].
pub struct GameEngine {
    catalog: ContentCatalog,
    store: SessionStore,
    session: Session,
    rng: StdRng,
    notices: Vec<Notice>,
}

impl GameEngine {
    /// Create an engine over a loaded catalog.
    pub fn new(catalog: ContentCatalog, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            catalog,
            store: SessionStore::new(config.state_dir),
            session: Session::new(),
            rng,
            notices: Vec::new(),
        }
    }

    /// The running session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The content catalog.
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// The persistence store (also holds the settings slot).
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Drain the notices accumulated since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Round and last category of the saved session, if one is resumable.
    pub fn saved_summary(&self) -> Option<(u32, Option<Category>)> {
        self.store
            .load()
            .map(|s| (s.current_round, s.last_card_type))
    }

    /// Start a fresh game over the given package selection, replacing
    /// any previous saved session.
    ///
    /// A package whose prompt files fail to load is skipped with a
    /// notice; if every selected package fails, the last load error is
    /// returned and the engine state is unchanged.
    pub fn start(&mut self, selected_ids: &[u32]) -> GameResult<()> {
        if selected_ids.is_empty() {
            return Err(GameError::EmptySelection);
        }
        let mut decks = Vec::new();
        let mut last_error = None;
        for &id in selected_ids {
            let descriptor = self
                .catalog
                .find(id)
                .ok_or(GameError::UnknownPackage(id))?
                .clone();
            let mut deck = PackageDeck::new(id);
            match deck.populate_fresh(
                &descriptor.name,
                &self.catalog.resolve(&descriptor.truth),
                &self.catalog.resolve(&descriptor.dare),
                &mut self.rng,
            ) {
                Ok(()) => decks.push(deck),
                Err(err) => {
                    self.notices.push(Notice::PackageLoadFailed(descriptor.name));
                    last_error = Some(err);
                }
            }
        }
        if decks.is_empty() {
            return Err(last_error.unwrap_or(GameError::EmptySelection));
        }
        self.session = Session::new();
        self.session.set_decks(decks);
        self.persist()
    }

    /// Resume the saved session, if present and fresh.
    ///
    /// Returns `false` (leaving the engine untouched) when there is
    /// nothing to resume. Saved packages missing from the catalog are
    /// dropped.
    pub fn resume(&mut self) -> GameResult<bool> {
        let Some(snapshot) = self.store.load() else {
            return Ok(false);
        };
        let SessionSnapshot {
            current_round,
            last_used_package_id,
            last_card_type,
            selected_package_ids,
            package_states,
            ..
        } = snapshot;

        let decks: Vec<PackageDeck> = package_states
            .into_iter()
            .filter(|state| {
                selected_package_ids.contains(&state.id) && self.catalog.find(state.id).is_some()
            })
            .map(crate::store::PackageSnapshot::into_deck)
            .collect();

        self.session = Session::new();
        self.session.current_round = current_round;
        self.session.set_decks(decks);
        if let Some(package_id) = last_used_package_id
            && let Some(category) = last_card_type
            && self.session.deck(package_id).is_some()
        {
            self.session.last_draw = Some(LastDraw {
                package_id,
                category,
            });
        }
        Ok(true)
    }

    /// Draw the next card of a category and advance the round.
    ///
    /// Package choice is weighted by remaining card count, so every
    /// remaining card is equally likely to be next. When the category is
    /// exhausted across all active decks they are all reshuffled once
    /// and the draw retries; a category with no cards anywhere is a
    /// terminal [`GameError::EmptyCategory`].
    pub fn draw(&mut self, category: Category) -> GameResult<DrawnCard> {
        let card = self.draw_card(category)?;
        self.session.current_round += 1;
        self.persist()?;
        Ok(card)
    }

    /// Repeat the last draw's package and category without advancing the
    /// round.
    ///
    /// Falls back to a normal draw (with a notice) when that package has
    /// no cards left in the category; the fallback advances the round
    /// like any draw.
    pub fn pass(&mut self) -> GameResult<DrawnCard> {
        let Some(last) = self.session.last_draw else {
            return Err(GameError::NoPriorDraw);
        };
        let category = last.category;
        let repeat = self
            .session
            .deck_mut(last.package_id)
            .and_then(|deck| deck.consume_next(category))
            .map(str::to_string);
        if let Some(text) = repeat {
            self.persist()?;
            return Ok(DrawnCard {
                text,
                package_name: self.package_name(last.package_id),
                category,
            });
        }
        self.notices.push(Notice::PassFallback(category));
        self.draw(category)
    }

    /// Apply a changed package selection to the running session.
    ///
    /// Retained decks keep their progress; re-added packages are
    /// restored from the latest snapshot; new packages load fresh. If
    /// the last draw's package is dropped, pass becomes unavailable and
    /// a notice is emitted.
    pub fn reconcile(&mut self, new_ids: &[u32]) -> GameResult<()> {
        if new_ids.is_empty() {
            return Err(GameError::EmptySelection);
        }
        for &id in new_ids {
            if self.catalog.find(id).is_none() {
                return Err(GameError::UnknownPackage(id));
            }
        }

        let removed_last = self
            .session
            .last_draw
            .filter(|last| !new_ids.contains(&last.package_id))
            .map(|last| self.package_name(last.package_id));

        let snapshot = self.store.load();
        let current = self.session.take_decks();
        let decks = merge_selection(
            current,
            new_ids,
            snapshot.as_ref(),
            &self.catalog,
            &mut self.rng,
            &mut self.notices,
        );
        let cleared = self.session.set_decks(decks);
        if cleared && let Some(name) = removed_last {
            self.notices.push(Notice::PackageRemoved(name));
        }
        self.persist()
    }

    /// Delete the saved session snapshot.
    pub fn clear_saved(&self) {
        self.store.clear();
    }

    /// Selection shared by draw and pass-fallback; does not touch the
    /// round counter.
    fn draw_card(&mut self, category: Category) -> GameResult<DrawnCard> {
        for attempt in 0..2 {
            let total: usize = self
                .session
                .decks()
                .iter()
                .map(|d| d.remaining(category))
                .sum();
            if total == 0 {
                // Reshuffle once; a category empty across the whole
                // selection is a configuration error, not a retry loop.
                if attempt > 0 || self.session.decks().iter().all(|d| d.total(category) == 0) {
                    return Err(GameError::EmptyCategory(category));
                }
                for deck in self.session.decks_mut() {
                    deck.reshuffle(category, &mut self.rng);
                }
                self.notices.push(Notice::CategoryExhausted(category));
                continue;
            }

            let mut roll = self.rng.random_range(0..total);
            let mut drawn: Option<(u32, String)> = None;
            for deck in self.session.decks_mut() {
                let remaining = deck.remaining(category);
                if roll < remaining {
                    let id = deck.id;
                    if let Some(card) = deck.consume_next(category) {
                        drawn = Some((id, card.to_string()));
                    }
                    break;
                }
                roll -= remaining;
            }
            if let Some((package_id, text)) = drawn {
                self.session.last_draw = Some(LastDraw {
                    package_id,
                    category,
                });
                return Ok(DrawnCard {
                    text,
                    package_name: self.package_name(package_id),
                    category,
                });
            }
        }
        Err(GameError::EmptyCategory(category))
    }

    fn package_name(&self, id: u32) -> String {
        self.catalog
            .find(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("package {id}"))
    }

    fn persist(&self) -> GameResult<()> {
        self.store.save(&SessionSnapshot::capture(&self.session))
    }
}
