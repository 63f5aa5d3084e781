//! Player number allocation.

use crate::models::{PlayerDraft, Session};

/// Smallest positive number not used by any saved or pending player.
/// With dense numbering 1..N this returns N+1.
pub fn next_player_number(session: &Session, drafts: &[PlayerDraft]) -> u32 {
    let used: Vec<u32> = session
        .players
        .iter()
        .map(|p| p.player_number)
        .chain(drafts.iter().map(|d| d.player_number))
        .collect();

    let mut next = 1;
    while used.contains(&next) {
        next += 1;
    }
    next
}
