//! Roster editor: the admin screen's command surface over a [`RosterStore`].
//!
//! Owns the screen-local state (per-row validation errors) and the gates
//! that sit between user actions and the store: the capacity gate on adds,
//! the name validation in front of batch saves, and the cancel-all
//! fallback for stores without a bulk clear.

use crate::models::{EditingPlayer, PlayerDraft, PlayerField, PlayerId, Session, SessionError};
use crate::roster::store::RosterStore;
use serde::Serialize;
use std::collections::HashMap;

/// Shown next to a draft row whose name is missing.
const NAME_REQUIRED: &str = "Player name is required";

/// Editing surface for one session's roster.
pub struct RosterEditor<S: RosterStore> {
    store: S,
    /// Validation errors keyed by draft row index.
    draft_errors: HashMap<usize, String>,
}

impl<S: RosterStore> RosterEditor<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            draft_errors: HashMap::new(),
        }
    }

    /// The underlying state owner.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn session(&self) -> &Session {
        self.store.session()
    }

    pub fn new_players(&self) -> &[PlayerDraft] {
        self.store.new_players()
    }

    pub fn editing_players(&self) -> &HashMap<PlayerId, EditingPlayer> {
        self.store.editing_players()
    }

    pub fn draft_errors(&self) -> &HashMap<usize, String> {
        &self.draft_errors
    }

    /// Capacity ceiling for the session: courts x players per court.
    pub fn max_players(&self) -> usize {
        self.store.session().max_players()
    }

    /// Saved players plus pending drafts.
    pub fn current_player_count(&self) -> usize {
        self.store.session().players.len() + self.store.new_players().len()
    }

    /// Whether the roster (saved + pending) has reached capacity.
    /// Advisory: the store itself does not reject over-capacity rosters.
    pub fn is_max_players_reached(&self) -> bool {
        self.current_player_count() >= self.max_players()
    }

    /// Add a pending draft row, unless the session is at capacity.
    /// The new row gets a `Player {number}` placeholder name if the store
    /// left it blank.
    pub fn add_player_row(&mut self) -> Result<(), SessionError> {
        if self.is_max_players_reached() {
            return Err(SessionError::CapacityReached {
                max: self.max_players(),
            });
        }
        let count_before = self.store.new_players().len();
        self.store.add_new_player_row();
        self.fill_default_name(count_before);
        Ok(())
    }

    /// Runs right after an observed draft-count increase; no-op when the
    /// row is already gone or the caller named it themselves.
    fn fill_default_name(&mut self, count_before: usize) {
        let drafts = self.store.new_players();
        if drafts.len() <= count_before {
            return;
        }
        let index = drafts.len() - 1;
        let placeholder = match drafts.get(index) {
            Some(draft) if draft.name.trim().is_empty() => {
                format!("Player {}", draft.player_number)
            }
            _ => return,
        };
        let _ = self
            .store
            .update_new_player(index, PlayerField::Name(placeholder));
    }

    /// Apply a field update to a draft row. Editing the name clears any
    /// validation error on that row.
    pub fn update_new_player(
        &mut self,
        index: usize,
        field: PlayerField,
    ) -> Result<(), SessionError> {
        if matches!(field, PlayerField::Name(_)) {
            self.draft_errors.remove(&index);
        }
        self.store.update_new_player(index, field)
    }

    /// Remove one draft row. Errors on later rows shift down with them.
    pub fn remove_player_row(&mut self, index: usize) -> Result<(), SessionError> {
        self.store.remove_new_player_row(index)?;
        self.draft_errors.remove(&index);
        let shifted = self
            .draft_errors
            .drain()
            .map(|(i, msg)| if i > index { (i - 1, msg) } else { (i, msg) })
            .collect();
        self.draft_errors = shifted;
        Ok(())
    }

    /// Discard every pending draft. Uses the store's bulk clear when it
    /// has one; otherwise removes rows one at a time, last index first.
    pub fn cancel_add_players(&mut self) {
        if self.store.new_players().is_empty() {
            return;
        }
        if !self.store.clear_all_new_players() {
            let count = self.store.new_players().len();
            for index in (0..count).rev() {
                let _ = self.store.remove_new_player_row(index);
            }
        }
        self.draft_errors.clear();
    }

    /// Check every draft for a non-empty, non-whitespace name. Failing
    /// rows get an error message; returns whether all rows passed.
    pub fn validate_new_players(&mut self) -> bool {
        let mut errors = HashMap::new();
        for (index, draft) in self.store.new_players().iter().enumerate() {
            if draft.name.trim().is_empty() {
                errors.insert(index, NAME_REQUIRED.to_string());
            }
        }
        self.draft_errors = errors;
        self.draft_errors.is_empty()
    }

    /// Commit all pending drafts to the roster, if they validate.
    /// Returns whether the save went through.
    pub fn save_player_changes(&mut self) -> bool {
        if !self.validate_new_players() {
            return false;
        }
        self.store.save_player_changes();
        true
    }

    pub fn start_editing_player(&mut self, id: PlayerId) -> Result<(), SessionError> {
        self.store.start_editing_player(id)
    }

    pub fn update_editing_player(
        &mut self,
        id: PlayerId,
        field: PlayerField,
    ) -> Result<(), SessionError> {
        self.store.update_editing_player(id, field)
    }

    pub fn cancel_editing_player(&mut self, id: PlayerId) {
        self.store.cancel_editing_player(id);
    }

    pub fn save_individual_player(&mut self, id: PlayerId) -> Result<(), SessionError> {
        self.store.save_individual_player(id)
    }

    pub fn delete_player(&mut self, id: PlayerId) -> Result<(), SessionError> {
        self.store.delete_player(id)
    }

    /// Snapshot of everything the admin screen renders.
    pub fn view(&self) -> RosterView {
        let mut session = self.store.session().clone();
        session.players = session.players_sorted();
        RosterView {
            capacity: CapacityView {
                max_players: self.max_players(),
                current_player_count: self.current_player_count(),
                is_max_players_reached: self.is_max_players_reached(),
            },
            session,
            new_players: self.store.new_players().to_vec(),
            editing_players: self.store.editing_players().clone(),
            draft_errors: self.draft_errors.clone(),
        }
    }
}

/// Capacity figures shown in the screen header.
#[derive(Clone, Debug, Serialize)]
pub struct CapacityView {
    pub max_players: usize,
    pub current_player_count: usize,
    pub is_max_players_reached: bool,
}

/// Serializable snapshot of the roster screen: session with its players
/// in display order, pending drafts, editing copies, and row errors.
#[derive(Clone, Debug, Serialize)]
pub struct RosterView {
    pub capacity: CapacityView,
    pub session: Session,
    pub new_players: Vec<PlayerDraft>,
    pub editing_players: HashMap<PlayerId, EditingPlayer>,
    pub draft_errors: HashMap<usize, String>,
}
