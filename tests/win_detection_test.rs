//! Tests for win detection over every possible board.

use rewind::game::{Board, Cell, Position, detect_winner, is_draw, rules::LINES, winning_line};

const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Decodes `n` in base 3 into a board (0 = empty, 1 = X, 2 = O).
fn board_from_code(mut n: u32) -> Board {
    let mut cells = [Cell::Empty; 9];
    for cell in cells.iter_mut() {
        *cell = match n % 3 {
            0 => Cell::Empty,
            1 => Cell::X,
            _ => Cell::O,
        };
        n /= 3;
    }
    Board::from_cells(cells)
}

fn complete_triples(board: &Board) -> Vec<Cell> {
    TRIPLES
        .iter()
        .filter_map(|&[a, b, c]| {
            let cells = board.cells();
            (cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c])
                .then_some(cells[a])
        })
        .collect()
}

#[test]
fn test_lines_match_index_triples() {
    let indices: Vec<[usize; 3]> = LINES.iter().map(|line| line.map(Position::to_index)).collect();
    assert_eq!(indices, TRIPLES.to_vec());
}

#[test]
fn test_exhaustive_boards() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        let complete = complete_triples(&board);
        let winner = detect_winner(&board);
        match complete.first() {
            Some(&first) => {
                assert_eq!(winner, first, "board {:?}", board);
                assert!(winning_line(&board).is_some());
                assert!(!is_draw(&board));
            }
            None => {
                assert_eq!(winner, Cell::Empty, "board {:?}", board);
                assert_eq!(winning_line(&board), None);
            }
        }
    }
}

#[test]
fn test_each_triple_wins_on_otherwise_empty_board() {
    for triple in TRIPLES {
        for mark in [Cell::X, Cell::O] {
            let board = triple
                .iter()
                .fold(Board::new(), |b, &i| b.with(i, mark).unwrap());
            assert_eq!(detect_winner(&board), mark);
        }
    }
}
