//! Roster state owner: the store contract and its in-memory implementation.

use crate::models::{
    EditingPlayer, PlayerDraft, PlayerField, PlayerId, Session, SessionError,
};
use crate::roster::numbering::next_player_number;
use std::collections::HashMap;

/// Owner of the authoritative roster state: the saved session, the pending
/// drafts, and the per-player editing copies. The editor drives it purely
/// through these commands and never mutates the state directly.
///
/// Capacity is not enforced here; gating is the editor's concern.
pub trait RosterStore {
    fn session(&self) -> &Session;
    fn new_players(&self) -> &[PlayerDraft];
    fn editing_players(&self) -> &HashMap<PlayerId, EditingPlayer>;

    /// Append an empty draft row carrying the next free player number.
    fn add_new_player_row(&mut self);

    /// Remove the pending draft at `index`.
    fn remove_new_player_row(&mut self, index: usize) -> Result<(), SessionError>;

    /// Remove every pending draft in one step. Returns `false` when the
    /// store has no bulk clear; callers then remove rows one at a time.
    fn clear_all_new_players(&mut self) -> bool {
        false
    }

    /// Apply one field update to the draft at `index`.
    fn update_new_player(&mut self, index: usize, field: PlayerField)
        -> Result<(), SessionError>;

    /// Enter edit mode for a saved player: clone their editable fields
    /// into the editing map (optional fields normalized).
    fn start_editing_player(&mut self, id: PlayerId) -> Result<(), SessionError>;

    /// Apply one field update to a player's editing copy.
    fn update_editing_player(&mut self, id: PlayerId, field: PlayerField)
        -> Result<(), SessionError>;

    /// Leave edit mode without saving. No-op if the player is not being edited.
    fn cancel_editing_player(&mut self, id: PlayerId);

    /// Write a player's editing copy back to the roster and leave edit mode.
    fn save_individual_player(&mut self, id: PlayerId) -> Result<(), SessionError>;

    /// Commit every pending draft to the roster and clear the drafts.
    fn save_player_changes(&mut self);

    /// Remove a saved player immediately. There is no undo.
    fn delete_player(&mut self, id: PlayerId) -> Result<(), SessionError>;
}

/// In-memory roster store for one session.
#[derive(Clone, Debug)]
pub struct SessionRoster {
    session: Session,
    new_players: Vec<PlayerDraft>,
    editing_players: HashMap<PlayerId, EditingPlayer>,
}

impl SessionRoster {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            new_players: Vec::new(),
            editing_players: HashMap::new(),
        }
    }
}

impl RosterStore for SessionRoster {
    fn session(&self) -> &Session {
        &self.session
    }

    fn new_players(&self) -> &[PlayerDraft] {
        &self.new_players
    }

    fn editing_players(&self) -> &HashMap<PlayerId, EditingPlayer> {
        &self.editing_players
    }

    fn add_new_player_row(&mut self) {
        let number = next_player_number(&self.session, &self.new_players);
        self.new_players.push(PlayerDraft::new(number));
    }

    fn remove_new_player_row(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.new_players.len() {
            return Err(SessionError::DraftIndexOutOfRange(index));
        }
        self.new_players.remove(index);
        Ok(())
    }

    fn clear_all_new_players(&mut self) -> bool {
        self.new_players.clear();
        true
    }

    fn update_new_player(
        &mut self,
        index: usize,
        field: PlayerField,
    ) -> Result<(), SessionError> {
        let draft = self
            .new_players
            .get_mut(index)
            .ok_or(SessionError::DraftIndexOutOfRange(index))?;
        draft.apply(field);
        Ok(())
    }

    fn start_editing_player(&mut self, id: PlayerId) -> Result<(), SessionError> {
        let player = self
            .session
            .get_player(id)
            .ok_or(SessionError::PlayerNotFound(id))?;
        self.editing_players
            .insert(id, EditingPlayer::from_player(player));
        Ok(())
    }

    fn update_editing_player(
        &mut self,
        id: PlayerId,
        field: PlayerField,
    ) -> Result<(), SessionError> {
        let editing = self
            .editing_players
            .get_mut(&id)
            .ok_or(SessionError::NotBeingEdited(id))?;
        editing.apply(field);
        Ok(())
    }

    fn cancel_editing_player(&mut self, id: PlayerId) {
        self.editing_players.remove(&id);
    }

    fn save_individual_player(&mut self, id: PlayerId) -> Result<(), SessionError> {
        let editing = self
            .editing_players
            .remove(&id)
            .ok_or(SessionError::NotBeingEdited(id))?;
        match self.session.get_player_mut(id) {
            Some(player) => {
                editing.apply_to(player);
                Ok(())
            }
            None => Err(SessionError::PlayerNotFound(id)),
        }
    }

    fn save_player_changes(&mut self) {
        for draft in self.new_players.drain(..) {
            self.session.players.push(draft.into_player());
        }
    }

    fn delete_player(&mut self, id: PlayerId) -> Result<(), SessionError> {
        let idx = self
            .session
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(SessionError::PlayerNotFound(id))?;
        self.session.players.remove(idx);
        // A deleted player cannot stay in edit mode.
        self.editing_players.remove(&id);
        Ok(())
    }
}
