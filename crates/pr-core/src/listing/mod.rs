//! Merge live sessions with remembered ones for display.

use std::collections::HashSet;

use crate::backend::LiveSession;
use crate::favourites::FavouriteSession;

/// One row of the session listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub session: LiveSession,
    /// False for history-only entries
    pub live: bool,
}

/// Live sessions in backend order, followed (with `include_history`) by
/// favourites that are not currently running.
pub fn collect_listing(
    live: &[LiveSession],
    favourites: &[FavouriteSession],
    include_history: bool,
) -> Vec<ListingEntry> {
    let mut entries: Vec<ListingEntry> = live
        .iter()
        .map(|session| ListingEntry {
            session: session.clone(),
            live: true,
        })
        .collect();

    if include_history {
        let running: HashSet<&str> = live.iter().map(|s| s.name.as_str()).collect();
        entries.extend(
            favourites
                .iter()
                .filter(|fav| !running.contains(fav.name.as_str()))
                .map(|fav| ListingEntry {
                    session: LiveSession::new(fav.name.clone(), fav.path.clone()),
                    live: false,
                }),
        );
    }

    entries
}
