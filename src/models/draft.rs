//! Pending player drafts and per-player editing state.

use crate::models::player::{Gender, Level, Player};
use serde::{Deserialize, Serialize};

/// One editable field of a player or draft, with its new value.
/// Field updates arrive as a single tagged command, never as a
/// string key + untyped value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum PlayerField {
    Name(String),
    Gender(Gender),
    Level(Option<Level>),
    LevelDescription(String),
    RequireConfirmInfo(bool),
}

/// A not-yet-saved player entry being composed before a batch save.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub player_number: u32,
    pub name: String,
    pub gender: Gender,
    pub level: Option<Level>,
    pub level_description: Option<String>,
    pub require_confirm_info: bool,
}

impl PlayerDraft {
    /// New empty draft for the given player number (name filled in later).
    pub fn new(player_number: u32) -> Self {
        Self {
            player_number,
            name: String::new(),
            gender: Gender::default(),
            level: None,
            level_description: None,
            require_confirm_info: false,
        }
    }

    /// Apply one field update to the draft.
    pub fn apply(&mut self, field: PlayerField) {
        match field {
            PlayerField::Name(name) => self.name = name,
            PlayerField::Gender(gender) => self.gender = gender,
            PlayerField::Level(level) => self.level = level,
            PlayerField::LevelDescription(text) => {
                self.level_description = if text.is_empty() { None } else { Some(text) };
            }
            PlayerField::RequireConfirmInfo(required) => self.require_confirm_info = required,
        }
    }

    /// Promote the draft to a saved player. New players start waiting,
    /// with zeroed counters, entered by the host and not yet confirmed.
    pub fn into_player(self) -> Player {
        let mut player = Player::new(self.player_number, self.name);
        player.gender = Some(self.gender);
        player.level = self.level;
        player.level_description = self.level_description;
        player.pre_filled_by_host = true;
        player.require_confirm_info = self.require_confirm_info;
        player
    }
}

/// Transient copy of a saved player's editable fields while their row is
/// in edit mode. Dropped on cancel, applied back on save.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EditingPlayer {
    pub name: String,
    pub gender: Option<Gender>,
    pub level: Option<Level>,
    /// Always present while editing; missing descriptions become "".
    pub level_description: String,
    pub require_confirm_info: bool,
}

impl EditingPlayer {
    /// Clone a player's editable fields, normalizing the optional ones
    /// so the edit form always has concrete values to bind to.
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            gender: player.gender,
            level: player.level,
            level_description: player.level_description.clone().unwrap_or_default(),
            require_confirm_info: player.require_confirm_info,
        }
    }

    /// Apply one field update to the editing copy.
    pub fn apply(&mut self, field: PlayerField) {
        match field {
            PlayerField::Name(name) => self.name = name,
            PlayerField::Gender(gender) => self.gender = Some(gender),
            PlayerField::Level(level) => self.level = level,
            PlayerField::LevelDescription(text) => self.level_description = text,
            PlayerField::RequireConfirmInfo(required) => self.require_confirm_info = required,
        }
    }

    /// Write the edited fields back onto the player.
    pub fn apply_to(&self, player: &mut Player) {
        player.name = self.name.clone();
        player.gender = self.gender;
        player.level = self.level;
        player.level_description = if self.level_description.is_empty() {
            None
        } else {
            Some(self.level_description.clone())
        };
        player.require_confirm_info = self.require_confirm_info;
    }
}
