//! Behavioural tests for the session controller.

use tictactoe_core::{
    Board, Cell, GameStatus, Mark, MoveOutcome, Notification, Rejection, Session, SessionError,
    rules,
};

fn play_all(session: &mut Session, moves: &[usize]) -> Vec<Notification> {
    let mut events: Vec<Notification> = Vec::new();
    for &index in moves {
        session.play_move(index, &mut events).expect("index in range");
    }
    events
}

#[test]
fn test_top_row_win_after_five_moves() {
    let mut session = Session::new();
    // A: 0, B: 3, A: 1, B: 4, A: 2
    let events = play_all(&mut session, &[0, 3, 1, 4, 2]);

    assert_eq!(
        events,
        vec![
            Notification::NextTurn(Mark::O),
            Notification::NextTurn(Mark::X),
            Notification::NextTurn(Mark::O),
            Notification::NextTurn(Mark::X),
            Notification::Win(Mark::X),
        ]
    );
    assert_eq!(session.status(), GameStatus::Won(Mark::X));
    assert_eq!(session.turn(), 5);
    assert_eq!(rules::winning_line(session.board()), Some([0, 1, 2]));
}

#[test]
fn test_nine_moves_without_line_is_draw() {
    let mut session = Session::new();
    let moves = [4, 0, 8, 2, 1, 7, 3, 5, 6];
    let events = play_all(&mut session, &moves);

    assert_eq!(events.len(), 9);
    assert_eq!(events.last(), Some(&Notification::Draw));
    assert!(
        events[..8]
            .iter()
            .all(|e| matches!(e, Notification::NextTurn(_)))
    );
    assert_eq!(session.status(), GameStatus::Draw);
    assert!(!rules::check_winner(session.board()));
    assert!(session.board().snapshot().iter().all(|c| !c.is_empty()));
}

#[test]
fn test_occupied_cell_is_ignored() {
    let mut session = Session::new();
    play_all(&mut session, &[4]);
    let before = session.clone();

    let mut events: Vec<Notification> = Vec::new();
    let outcome = session.play_move(4, &mut events).expect("index in range");

    assert_eq!(outcome, MoveOutcome::Rejected(Rejection::Occupied));
    assert_eq!(session, before);
    assert_eq!(session.turn(), 2);
    assert!(events.is_empty());
}

#[test]
fn test_moves_after_game_over_are_ignored() {
    for moves in [&[0, 3, 1, 4, 2][..], &[4, 0, 8, 2, 1, 7, 3, 5, 6][..]] {
        let mut session = Session::new();
        play_all(&mut session, moves);
        assert!(session.is_over());
        let before = session.clone();

        let mut events: Vec<Notification> = Vec::new();
        for index in 0..9 {
            let outcome = session.play_move(index, &mut events).expect("index in range");
            assert_eq!(outcome, MoveOutcome::Rejected(Rejection::GameOver));
        }
        assert_eq!(session, before);
        assert!(events.is_empty());
    }
}

#[test]
fn test_out_of_range_after_game_over_is_still_an_error() {
    let mut session = Session::new();
    play_all(&mut session, &[0, 3, 1, 4, 2]);
    assert_eq!(session.status(), GameStatus::Won(Mark::X));
    let before = session.clone();

    let mut events: Vec<Notification> = Vec::new();
    assert_eq!(
        session.play_move(9, &mut events),
        Err(SessionError::OutOfRange { index: 9 })
    );
    assert_eq!(session, before);
    assert!(events.is_empty());
}

#[test]
fn test_reset_from_any_state() {
    for moves in [
        &[][..],
        &[4, 0][..],
        &[0, 3, 1, 4, 2][..],
        &[4, 0, 8, 2, 1, 7, 3, 5, 6][..],
    ] {
        let mut session = Session::new();
        play_all(&mut session, moves);

        let mut events: Vec<Notification> = Vec::new();
        session.reset(&mut events);

        assert_eq!(events, vec![Notification::Cleared]);
        assert_eq!(session.turn(), 1);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session, Session::new());
    }
}

#[test]
fn test_sessions_are_independent() {
    let mut first = Session::new();
    let second = Session::new();
    play_all(&mut first, &[0, 1, 2]);

    assert_eq!(first.board().get_cell(0), Ok(Cell::Marked(Mark::X)));
    assert_eq!(second.board().get_cell(0), Ok(Cell::Empty));
    assert_eq!(second.turn(), 1);
}

#[test]
fn test_closure_port_receives_notifications() {
    let mut session = Session::new();
    let mut log = Vec::new();
    let mut port = |n: Notification| log.push(n.to_string());

    session.play_move(0, &mut port).expect("index in range");
    session.reset(&mut port);

    assert_eq!(log, vec!["next turn: O".to_string(), "cleared".to_string()]);
}

#[test]
fn test_notifications_serialize_with_event_tag() {
    let json = serde_json::to_string(&Notification::Win(Mark::O)).expect("serializable");
    assert_eq!(json, r#"{"event":"Win","mark":"O"}"#);
    let json = serde_json::to_string(&Notification::Draw).expect("serializable");
    assert_eq!(json, r#"{"event":"Draw"}"#);
}
