//! Integration tests for display helpers: level labels and name fallback.

use badminton_session_web::{Level, Player};

#[test]
fn level_labels_match_the_club_ladder() {
    let expected = [
        (Level::YMinus, "Y-"),
        (Level::Y, "Y"),
        (Level::YPlus, "Y+"),
        (Level::Tby, "TBY"),
        (Level::TbMinus, "TB-"),
        (Level::Tb, "TB"),
        (Level::TbPlus, "TB+"),
        (Level::K, "K"),
    ];
    for (level, label) in expected {
        assert_eq!(level.label(), label);
    }
}

#[test]
fn blank_names_fall_back_to_the_player_number() {
    let named = Player::new(4, "Mai");
    assert_eq!(named.display_name(), "Mai");

    let unnamed = Player::new(7, "  ");
    assert_eq!(unnamed.display_name(), "Player 7");
}
