//! Tests for history append and jump.

use rewind::game::{Board, Cell, GameHistory, HistoryError, Player, append, apply_move, jump_to};

fn line_of_play(indices: &[usize]) -> Vec<Board> {
    let mut boards = vec![Board::new()];
    for (n, &index) in indices.iter().enumerate() {
        let last = boards[boards.len() - 1];
        boards.push(apply_move(&last, index, n % 2 == 0).expect("legal move"));
    }
    boards
}

#[test]
fn test_append_length_and_prefix() {
    let history = line_of_play(&[4, 0, 8, 2, 6]);
    for at_move in 0..history.len() {
        let new_board = history[at_move].with(1, Cell::from(Player::for_move(at_move))).unwrap();
        let result = append(&history, at_move, new_board).expect("in range");
        assert_eq!(result.len(), at_move + 2);
        assert_eq!(&result[..=at_move], &history[..=at_move]);
        assert_eq!(result.last(), Some(&new_board));
    }
}

#[test]
fn test_append_does_not_touch_input() {
    let history = line_of_play(&[0, 1, 2]);
    let snapshot = history.clone();
    let _ = append(&history, 0, Board::new()).unwrap();
    assert_eq!(history, snapshot);
}

#[test]
fn test_append_out_of_range() {
    let history = line_of_play(&[0]);
    assert_eq!(
        append(&history, 5, Board::new()),
        Err(HistoryError::OutOfRange { index: 5, len: 2 })
    );
}

#[test]
fn test_jump_to_passthrough() {
    for len in 1..=10 {
        for index in 0..len {
            assert_eq!(jump_to(index, len), Ok(index));
        }
        assert!(jump_to(len, len).is_err());
    }
}

#[test]
fn test_jump_to_current_move_is_identity() {
    let mut history = GameHistory::new();
    for board in line_of_play(&[4, 0, 8]).into_iter().skip(1) {
        history = history.with_move(board).unwrap();
    }
    for index in 0..history.len() {
        let at = history.with_jump(index).unwrap();
        assert_eq!(at.with_jump(at.current_move()).unwrap(), at);
    }
}

#[test]
fn test_turn_follows_pointer() {
    let mut history = GameHistory::new();
    for board in line_of_play(&[4, 0, 8]).into_iter().skip(1) {
        history = history.with_move(board).unwrap();
    }
    for index in 0..history.len() {
        let at = history.with_jump(index).unwrap();
        assert_eq!(at.is_x_next(), index % 2 == 0);
    }
}
