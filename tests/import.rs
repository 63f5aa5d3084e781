//! Integration tests for CSV roster import.

use badminton_session_web::{
    read_roster_csv, Gender, Level, RosterEditor, Session, SessionError, SessionRoster,
};

fn editor_with_capacity(courts: u32, per_court: u32) -> RosterEditor<SessionRoster> {
    RosterEditor::new(SessionRoster::new(Session::new("import", courts, per_court)))
}

#[test]
fn parses_full_rows_into_drafts() {
    let csv = "name,gender,level,level_description,require_confirm_info\n\
               Alex,FEMALE,TB_PLUS,lefty,true\n\
               Binh,MALE,Y,,false\n";
    let records = read_roster_csv(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);

    let mut editor = editor_with_capacity(2, 4);
    let added = editor.import_players(records).unwrap();
    assert_eq!(added, 2);

    let drafts = editor.new_players();
    assert_eq!(drafts[0].name, "Alex");
    assert_eq!(drafts[0].gender, Gender::Female);
    assert_eq!(drafts[0].level, Some(Level::TbPlus));
    assert_eq!(drafts[0].level_description.as_deref(), Some("lefty"));
    assert!(drafts[0].require_confirm_info);

    assert_eq!(drafts[1].name, "Binh");
    assert_eq!(drafts[1].player_number, 2);
    assert_eq!(drafts[1].level, Some(Level::Y));
    assert!(!drafts[1].require_confirm_info);
}

#[test]
fn blank_name_keeps_the_numbered_placeholder() {
    let csv = "name,gender,level,level_description,require_confirm_info\n,,,,\n";
    let records = read_roster_csv(csv.as_bytes()).unwrap();

    let mut editor = editor_with_capacity(2, 4);
    editor.import_players(records).unwrap();
    assert_eq!(editor.new_players()[0].name, "Player 1");
}

#[test]
fn import_stops_at_capacity() {
    // 1 court x 2 players per court = 2
    let csv = "name,gender,level,level_description,require_confirm_info\n\
               Alex,,,,\nBinh,,,,\nChi,,,,\n";
    let records = read_roster_csv(csv.as_bytes()).unwrap();

    let mut editor = editor_with_capacity(1, 2);
    assert!(matches!(
        editor.import_players(records),
        Err(SessionError::CapacityReached { max: 2 })
    ));
    assert_eq!(editor.new_players().len(), 2);
}

#[test]
fn malformed_input_is_rejected() {
    let csv = "name,gender,level,level_description,require_confirm_info\n\
               Alex,NEITHER,TB,notes,true\n";
    assert!(matches!(
        read_roster_csv(csv.as_bytes()),
        Err(SessionError::InvalidRoster(_))
    ));
}

#[test]
fn imported_drafts_validate_and_save() {
    let csv = "name,gender,level,level_description,require_confirm_info\nAlex,,,,\n";
    let records = read_roster_csv(csv.as_bytes()).unwrap();

    let mut editor = editor_with_capacity(2, 4);
    editor.import_players(records).unwrap();
    assert!(editor.save_player_changes());
    assert_eq!(editor.session().players.len(), 1);
    assert_eq!(editor.session().players[0].name, "Alex");
}
