//! Merging a changed package selection into a running session.

use rand::rngs::StdRng;

use crate::catalog::ContentCatalog;
use crate::deck::PackageDeck;
use crate::notice::Notice;
use crate::store::SessionSnapshot;

/// Build the deck set for a new selection.
///
/// Decks already active keep their state untouched. Packages re-added
/// after a deselection are restored verbatim from the latest snapshot so
/// their progress survives the round trip. Everything else is populated
/// fresh; a package whose prompts fail to load is skipped with a notice.
///
/// Caller guarantees every id exists in the catalog.
pub(crate) fn merge_selection(
    current: Vec<PackageDeck>,
    new_ids: &[u32],
    snapshot: Option<&SessionSnapshot>,
    catalog: &ContentCatalog,
    rng: &mut StdRng,
    notices: &mut Vec<Notice>,
) -> Vec<PackageDeck> {
    let mut next: Vec<PackageDeck> = current
        .into_iter()
        .filter(|deck| new_ids.contains(&deck.id))
        .collect();

    for &id in new_ids {
        if next.iter().any(|d| d.id == id) {
            continue;
        }
        if let Some(state) = snapshot.and_then(|s| s.package_state(id)) {
            next.push(state.clone().into_deck());
            continue;
        }
        let Some(descriptor) = catalog.find(id) else {
            continue;
        };
        let mut deck = PackageDeck::new(id);
        match deck.populate_fresh(
            &descriptor.name,
            &catalog.resolve(&descriptor.truth),
            &catalog.resolve(&descriptor.dare),
            rng,
        ) {
            Ok(()) => next.push(deck),
            // populate_fresh only fails with ResourceLoad.
            Err(_) => {
                notices.push(Notice::PackageLoadFailed(descriptor.name.clone()));
            }
        }
    }

    next
}
