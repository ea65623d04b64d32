//! Tests for session turn discipline and deferred AI-move validity.

use gridlock_core::{
    EventSink, GameStatus, Mode, Player, Position, Session,
};

fn ai_session() -> Session {
    Session::seeded(Mode::PlayerVsAi, EventSink::disconnected(), 42)
}

#[test]
fn test_pvp_moves_never_issue_tickets() {
    let mut session = Session::seeded(Mode::PlayerVsPlayer, EventSink::disconnected(), 42);
    assert_eq!(session.request_move(Position::Center), None);
    assert_eq!(session.request_move(Position::TopLeft), None);
    assert_eq!(session.engine().current_player(), Player::X);
}

#[test]
fn test_human_move_in_ai_mode_issues_a_ticket() {
    let mut session = ai_session();
    let ticket = session.request_move(Position::Center);
    assert!(ticket.is_some());
    assert_eq!(session.engine().current_player(), Player::O);
}

#[test]
fn test_human_cannot_move_while_cpu_is_thinking() {
    let mut session = ai_session();
    let _ticket = session.request_move(Position::Center).unwrap();

    // It is O's turn until the deferred move fires; further human input
    // is dropped without touching the board.
    let board_before = session.engine().board().clone();
    assert_eq!(session.request_move(Position::TopLeft), None);
    assert_eq!(session.engine().board(), &board_before);
    assert_eq!(session.engine().current_player(), Player::O);
}

#[test]
fn test_fired_ticket_applies_one_ai_move() {
    let mut session = ai_session();
    let ticket = session.request_move(Position::Center).unwrap();

    assert!(session.fire_ai(ticket));
    assert_eq!(session.engine().current_player(), Player::X);

    // The same ticket cannot fire twice.
    assert!(!session.fire_ai(ticket));
}

#[test]
fn test_reset_during_delay_discards_pending_move() {
    let mut session = ai_session();
    let ticket = session.request_move(Position::Center).unwrap();

    session.request_reset();
    assert!(!session.fire_ai(ticket));
    assert!(
        Position::ALL
            .iter()
            .all(|&p| session.engine().board().is_empty(p))
    );
    assert_eq!(session.engine().current_player(), Player::X);
}

#[test]
fn test_stale_ticket_ignored_even_when_o_is_to_move_again() {
    let mut session = ai_session();
    let stale = session.request_move(Position::Center).unwrap();

    // Reset and replay into a state where it is O's turn again: the old
    // ticket must still be dead, only the fresh one may fire.
    session.request_reset();
    let fresh = session.request_move(Position::TopLeft).unwrap();
    assert_eq!(session.engine().current_player(), Player::O);

    assert!(!session.fire_ai(stale));
    assert!(session.fire_ai(fresh));
}

#[test]
fn test_mode_change_during_delay_discards_pending_move() {
    let mut session = ai_session();
    let ticket = session.request_move(Position::Center).unwrap();

    session.request_mode_change(Mode::PlayerVsPlayer);
    assert!(!session.fire_ai(ticket));
    assert!(
        Position::ALL
            .iter()
            .all(|&p| session.engine().board().is_empty(p))
    );
}

#[test]
fn test_ai_blocks_an_immediate_threat() {
    let mut session = ai_session();

    // X opens top-left; wherever O replies, X then threatens a line and
    // the heuristic must block or win, never ignore the threat.
    let ticket = session.request_move(Position::TopLeft).unwrap();
    assert!(session.fire_ai(ticket));

    // Build an explicit threat: X takes the center if free, else mid-left.
    let second = if session.engine().board().is_empty(Position::Center) {
        Position::Center
    } else {
        Position::MiddleLeft
    };
    if let Some(ticket) = session.request_move(second) {
        assert!(session.fire_ai(ticket));
    }
    assert_eq!(session.engine().current_player(), Player::X);
}

#[test]
fn test_game_plays_to_completion_in_ai_mode() {
    let mut session = ai_session();

    // Drive the human side with a fixed preference order; the session must
    // reach a terminal state and record exactly one result.
    let preference = Position::ALL;
    let mut guard = 0;
    while session.engine().status() == GameStatus::InProgress {
        let pos = preference
            .iter()
            .copied()
            .find(|&p| session.engine().board().is_empty(p))
            .expect("in-progress game has an empty square");
        if let Some(ticket) = session.request_move(pos) {
            session.fire_ai(ticket);
        }
        guard += 1;
        assert!(guard < 10, "game did not terminate");
    }

    let score = session.engine().score();
    assert_eq!(score.x_wins() + score.o_wins() + score.draws(), 1);
}
