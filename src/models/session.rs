//! Session and SessionError.

use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during roster operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionError {
    /// Courts x players-per-court is already filled by saved + pending players.
    CapacityReached { max: usize },
    /// No pending draft at this index.
    DraftIndexOutOfRange(usize),
    /// Player not found on the roster.
    PlayerNotFound(PlayerId),
    /// Player is not currently in edit mode.
    NotBeingEdited(PlayerId),
    /// Roster import input could not be parsed.
    InvalidRoster(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::CapacityReached { max } => {
                write!(f, "Maximum players reached ({})", max)
            }
            SessionError::DraftIndexOutOfRange(index) => {
                write!(f, "No pending player at index {}", index)
            }
            SessionError::PlayerNotFound(_) => write!(f, "Player not found"),
            SessionError::NotBeingEdited(_) => write!(f, "Player is not being edited"),
            SessionError::InvalidRoster(reason) => write!(f, "Invalid roster data: {}", reason),
        }
    }
}

/// Unique identifier for a session.
pub type SessionId = Uuid;

/// A scheduled play event: court/capacity configuration and the saved roster.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub name: String,
    /// When the session takes place; unset for ad-hoc sessions.
    pub scheduled_at: Option<DateTime<Utc>>,
    pub number_of_courts: u32,
    pub max_players_per_court: u32,
    /// Saved players, in the order they were added. Display order is
    /// always derived; this ordering is never rewritten for sorting.
    pub players: Vec<Player>,
}

impl Session {
    /// Create a new session with an empty roster.
    pub fn new(
        name: impl Into<String>,
        number_of_courts: u32,
        max_players_per_court: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            scheduled_at: None,
            number_of_courts,
            max_players_per_court,
            players: Vec::new(),
        }
    }

    /// Capacity ceiling: courts x players per court.
    pub fn max_players(&self) -> usize {
        (self.number_of_courts * self.max_players_per_court) as usize
    }

    /// Reference to a saved player by id.
    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Mutable reference to a saved player by id.
    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Roster sorted ascending by player number, as shown in the admin
    /// list. Sorts a derived copy; `players` keeps its own order.
    pub fn players_sorted(&self) -> Vec<Player> {
        let mut sorted = self.players.clone();
        sorted.sort_by_key(|p| p.player_number);
        sorted
    }
}
