//! Player data structures: gender, skill level, status, and the Player record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in edits, deletes, and lookups).
pub type PlayerId = Uuid;

/// Unique identifier for a court a player may be assigned to.
pub type CourtId = Uuid;

/// Player gender, as picked in the roster form.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Skill level ladder used by the club (Y- up to K).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    YMinus,
    Y,
    YPlus,
    Tby,
    TbMinus,
    Tb,
    TbPlus,
    K,
}

impl Level {
    /// Short label shown next to a player (e.g. "TB+").
    pub fn label(&self) -> &'static str {
        match self {
            Level::YMinus => "Y-",
            Level::Y => "Y",
            Level::YPlus => "Y+",
            Level::Tby => "TBY",
            Level::TbMinus => "TB-",
            Level::Tb => "TB",
            Level::TbPlus => "TB+",
            Level::K => "K",
        }
    }
}

/// Where a player currently is within the session rotation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerStatus {
    /// On a court right now.
    Playing,
    /// In the queue for the next free court.
    #[default]
    Waiting,
    /// Sitting out by choice.
    Resting,
}

/// A saved player on the session roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Positive, unique across the roster and any pending drafts.
    pub player_number: u32,
    pub name: String,
    pub gender: Option<Gender>,
    pub level: Option<Level>,
    /// Free-form notes about the player's level.
    pub level_description: Option<String>,
    pub status: PlayerStatus,
    /// Seconds waited since last leaving a court.
    pub current_wait_time: u32,
    /// Seconds waited over the whole session.
    pub total_wait_time: u32,
    pub matches_played: u32,
    pub current_court_id: Option<CourtId>,
    /// Entered by the host rather than the player themselves.
    pub pre_filled_by_host: bool,
    pub confirmed_by_player: bool,
    /// Player must confirm their info before being scheduled.
    pub require_confirm_info: bool,
}

impl Player {
    /// Create a new waiting player with the given number and name. Counters start at zero.
    pub fn new(player_number: u32, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_number,
            name: name.into(),
            gender: None,
            level: None,
            level_description: None,
            status: PlayerStatus::Waiting,
            current_wait_time: 0,
            total_wait_time: 0,
            matches_played: 0,
            current_court_id: None,
            pre_filled_by_host: false,
            confirmed_by_player: false,
            require_confirm_info: false,
        }
    }

    /// Name to show in lists; numbered placeholder when the name is blank.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("Player {}", self.player_number)
        } else {
            self.name.clone()
        }
    }
}
