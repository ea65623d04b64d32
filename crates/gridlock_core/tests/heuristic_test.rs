//! Tests for the opponent heuristic's priority order.

use gridlock_core::{Board, Player, Position, Square, heuristic};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn board_from(layout: [&str; 9]) -> Board {
    let mut board = Board::new();
    for (index, mark) in layout.iter().enumerate() {
        let square = match *mark {
            "X" => Square::Occupied(Player::X),
            "O" => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
        board.set(Position::from_index(index).unwrap(), square);
    }
    board
}

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

#[test]
fn test_takes_the_winning_completion() {
    let board = board_from(["O", "O", "", "", "", "", "", "", ""]);
    assert_eq!(
        heuristic::choose(&board, &mut rng()),
        Some(Position::TopRight)
    );
}

#[test]
fn test_win_takes_priority_over_block() {
    // O can finish the top row and X threatens the middle row; the win
    // must be taken, not the block.
    let board = board_from(["O", "O", "", "X", "X", "", "", "", ""]);
    assert_eq!(
        heuristic::choose(&board, &mut rng()),
        Some(Position::TopRight)
    );
}

#[test]
fn test_blocks_when_no_win_is_available() {
    let board = board_from(["X", "X", "", "", "O", "", "", "", ""]);
    assert_eq!(
        heuristic::choose(&board, &mut rng()),
        Some(Position::TopRight)
    );
}

#[test]
fn test_simultaneous_completions_follow_line_order() {
    // O threatens both the top row (cell 2) and the left column (cell 6).
    // Rows are scanned before columns, so cell 2 wins the tie.
    let board = board_from(["O", "O", "", "O", "X", "", "", "X", ""]);
    assert_eq!(
        heuristic::choose(&board, &mut rng()),
        Some(Position::TopRight)
    );
}

#[test]
fn test_random_fallback_stays_on_empty_cells() {
    let board = board_from(["X", "", "", "", "O", "", "", "", ""]);
    let open = Position::valid_moves(&board);
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let choice = heuristic::choose(&board, &mut rng).unwrap();
        assert!(open.contains(&choice));
    }
}

#[test]
fn test_empty_board_gets_some_cell() {
    let board = Board::new();
    let choice = heuristic::choose(&board, &mut rng());
    assert!(choice.is_some());
}

#[test]
fn test_full_board_yields_no_move() {
    let board = board_from(["X", "O", "X", "X", "O", "O", "O", "X", "X"]);
    assert_eq!(heuristic::choose(&board, &mut rng()), None);
}
