//! Badminton session web app: library with models and roster management.

pub mod models;
pub mod roster;

pub use models::{
    CourtId, EditingPlayer, Gender, Level, Player, PlayerDraft, PlayerField, PlayerId,
    PlayerStatus, Session, SessionError, SessionId,
};
pub use roster::{
    next_player_number, read_roster_csv, CapacityView, RosterEditor, RosterRecord, RosterStore,
    RosterView, SessionRoster,
};
