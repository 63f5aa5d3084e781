//! Data structures for the session roster: players, drafts, sessions.

mod draft;
mod player;
mod session;

pub use draft::{EditingPlayer, PlayerDraft, PlayerField};
pub use player::{CourtId, Gender, Level, Player, PlayerId, PlayerStatus};
pub use session::{Session, SessionError, SessionId};
