//! Integration tests for editing saved players: toggle, save, cancel, delete.

use badminton_session_web::{
    next_player_number, Gender, Level, Player, PlayerField, PlayerId, RosterEditor, Session,
    SessionError, SessionRoster,
};
use uuid::Uuid;

fn editor_with_roster(numbers: &[u32]) -> (RosterEditor<SessionRoster>, Vec<PlayerId>) {
    let mut session = Session::new("Friday night", 2, 4);
    for &number in numbers {
        session.players.push(Player::new(number, format!("P{number}")));
    }
    let ids = session.players.iter().map(|p| p.id).collect();
    (RosterEditor::new(SessionRoster::new(session)), ids)
}

#[test]
fn start_editing_normalizes_missing_fields() {
    let (mut editor, ids) = editor_with_roster(&[1]);
    editor.start_editing_player(ids[0]).unwrap();

    let entry = &editor.editing_players()[&ids[0]];
    assert_eq!(entry.level_description, "");
    assert!(!entry.require_confirm_info);
    assert_eq!(entry.name, "P1");
}

#[test]
fn start_editing_carries_existing_fields() {
    let (mut editor, ids) = {
        let mut session = Session::new("Friday night", 2, 4);
        let mut player = Player::new(1, "Mai");
        player.level = Some(Level::TbPlus);
        player.level_description = Some("strong smash".to_string());
        player.require_confirm_info = true;
        session.players.push(player);
        let ids: Vec<PlayerId> = session.players.iter().map(|p| p.id).collect();
        (RosterEditor::new(SessionRoster::new(session)), ids)
    };
    editor.start_editing_player(ids[0]).unwrap();

    let entry = &editor.editing_players()[&ids[0]];
    assert_eq!(entry.level, Some(Level::TbPlus));
    assert_eq!(entry.level_description, "strong smash");
    assert!(entry.require_confirm_info);
}

#[test]
fn start_editing_unknown_player_is_an_error() {
    let (mut editor, _) = editor_with_roster(&[1]);
    let ghost = Uuid::new_v4();
    assert!(matches!(
        editor.start_editing_player(ghost),
        Err(SessionError::PlayerNotFound(id)) if id == ghost
    ));
}

#[test]
fn saving_an_edit_writes_fields_back() {
    let (mut editor, ids) = editor_with_roster(&[1]);
    editor.start_editing_player(ids[0]).unwrap();
    editor
        .update_editing_player(ids[0], PlayerField::Name("Quang".to_string()))
        .unwrap();
    editor
        .update_editing_player(ids[0], PlayerField::Gender(Gender::Female))
        .unwrap();
    editor
        .update_editing_player(ids[0], PlayerField::Level(Some(Level::K)))
        .unwrap();
    editor
        .update_editing_player(ids[0], PlayerField::LevelDescription("club champ".to_string()))
        .unwrap();
    editor.save_individual_player(ids[0]).unwrap();

    let player = editor.session().get_player(ids[0]).unwrap();
    assert_eq!(player.name, "Quang");
    assert_eq!(player.gender, Some(Gender::Female));
    assert_eq!(player.level, Some(Level::K));
    assert_eq!(player.level_description.as_deref(), Some("club champ"));
    assert!(editor.editing_players().is_empty());
}

#[test]
fn clearing_the_description_saves_none() {
    let (mut editor, ids) = {
        let mut session = Session::new("Friday night", 2, 4);
        let mut player = Player::new(1, "Mai");
        player.level_description = Some("old notes".to_string());
        session.players.push(player);
        let ids: Vec<PlayerId> = session.players.iter().map(|p| p.id).collect();
        (RosterEditor::new(SessionRoster::new(session)), ids)
    };
    editor.start_editing_player(ids[0]).unwrap();
    editor
        .update_editing_player(ids[0], PlayerField::LevelDescription(String::new()))
        .unwrap();
    editor.save_individual_player(ids[0]).unwrap();

    let player = editor.session().get_player(ids[0]).unwrap();
    assert_eq!(player.level_description, None);
}

#[test]
fn cancel_discards_the_edit() {
    let (mut editor, ids) = editor_with_roster(&[1]);
    editor.start_editing_player(ids[0]).unwrap();
    editor
        .update_editing_player(ids[0], PlayerField::Name("changed".to_string()))
        .unwrap();
    editor.cancel_editing_player(ids[0]);

    assert!(editor.editing_players().is_empty());
    assert_eq!(editor.session().get_player(ids[0]).unwrap().name, "P1");
}

#[test]
fn updating_without_edit_mode_is_an_error() {
    let (mut editor, ids) = editor_with_roster(&[1]);
    assert!(matches!(
        editor.update_editing_player(ids[0], PlayerField::Name("x".to_string())),
        Err(SessionError::NotBeingEdited(_))
    ));
    assert!(matches!(
        editor.save_individual_player(ids[0]),
        Err(SessionError::NotBeingEdited(_))
    ));
}

#[test]
fn delete_removes_player_and_any_edit_state() {
    let (mut editor, ids) = editor_with_roster(&[1, 2]);
    editor.start_editing_player(ids[0]).unwrap();
    editor.delete_player(ids[0]).unwrap();

    assert_eq!(editor.session().players.len(), 1);
    assert!(editor.editing_players().is_empty());
}

#[test]
fn delete_frees_the_player_number() {
    let (mut editor, ids) = editor_with_roster(&[1, 2]);
    editor.delete_player(ids[0]).unwrap();

    assert_eq!(next_player_number(editor.session(), editor.new_players()), 1);
}

#[test]
fn delete_unknown_player_is_an_error() {
    let (mut editor, _) = editor_with_roster(&[1]);
    assert!(matches!(
        editor.delete_player(Uuid::new_v4()),
        Err(SessionError::PlayerNotFound(_))
    ));
}
