//! Bulk roster intake: CSV rows become pending draft rows.

use crate::models::{Gender, Level, PlayerField, SessionError};
use crate::roster::editor::RosterEditor;
use crate::roster::store::RosterStore;
use serde::Deserialize;
use std::io::Read;

/// One row of a roster CSV. Header required:
/// `name,gender,level,level_description,require_confirm_info`
/// (all but `name` may be left empty).
#[derive(Clone, Debug, Deserialize)]
pub struct RosterRecord {
    pub name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub level_description: Option<String>,
    #[serde(default)]
    pub require_confirm_info: Option<bool>,
}

/// Parse a roster CSV. Any malformed row fails the whole import.
pub fn read_roster_csv<R: Read>(reader: R) -> Result<Vec<RosterRecord>, SessionError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: RosterRecord =
            row.map_err(|e| SessionError::InvalidRoster(e.to_string()))?;
        records.push(record);
    }
    Ok(records)
}

impl<S: RosterStore> RosterEditor<S> {
    /// Add one pending draft per record, through the usual gated add path.
    /// Stops with `CapacityReached` once the session is full; rows added
    /// before that point stay pending. Records with a blank name keep the
    /// numbered placeholder. Returns how many rows were added.
    pub fn import_players(&mut self, records: Vec<RosterRecord>) -> Result<usize, SessionError> {
        let mut added = 0;
        for record in records {
            self.add_player_row()?;
            let index = self.new_players().len() - 1;
            if !record.name.trim().is_empty() {
                self.update_new_player(index, PlayerField::Name(record.name))?;
            }
            if let Some(gender) = record.gender {
                self.update_new_player(index, PlayerField::Gender(gender))?;
            }
            if record.level.is_some() {
                self.update_new_player(index, PlayerField::Level(record.level))?;
            }
            if let Some(description) = record.level_description {
                self.update_new_player(index, PlayerField::LevelDescription(description))?;
            }
            if let Some(required) = record.require_confirm_info {
                self.update_new_player(index, PlayerField::RequireConfirmInfo(required))?;
            }
            added += 1;
        }
        Ok(added)
    }
}
