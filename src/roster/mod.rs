//! Roster management: number allocation, the state store, the editor, CSV import.

mod editor;
mod import;
mod numbering;
mod store;

pub use editor::{CapacityView, RosterEditor, RosterView};
pub use import::{read_roster_csv, RosterRecord};
pub use numbering::next_player_number;
pub use store::{RosterStore, SessionRoster};
