//! Move selection for the AI opponent.
//!
//! Three rules, in strict priority order:
//!
//! 1. Win now - complete a line that already holds two O marks.
//! 2. Block - occupy the empty cell of a line holding two X marks.
//! 3. Fall back to a uniformly random empty cell.
//!
//! Lines are scanned in [`rules::WINNING_LINES`] declaration order and the
//! first match wins. The opponent is deliberately beatable: it cannot see
//! forks or double threats, and that suboptimality is part of the product.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use rand::Rng;
use tracing::{debug, instrument};

/// Chooses the next move for O on the given board.
///
/// Pure in the board state; randomness only enters through rule 3.
/// Returns `None` when the board has no empty cell.
#[instrument(skip(rng))]
pub fn choose<R: Rng>(board: &Board, rng: &mut R) -> Option<Position> {
    if let Some(pos) = completion_for(board, Player::O) {
        debug!(position = %pos, "winning move");
        return Some(pos);
    }
    if let Some(pos) = completion_for(board, Player::X) {
        debug!(position = %pos, "blocking move");
        return Some(pos);
    }

    let open = Position::valid_moves(board);
    if open.is_empty() {
        return None;
    }
    let pos = open[rng.gen_range(0..open.len())];
    debug!(position = %pos, "random move");
    Some(pos)
}

/// Finds the empty cell of the first line where `player` holds the other two.
fn completion_for(board: &Board, player: Player) -> Option<Position> {
    for line in rules::WINNING_LINES {
        let mut held = 0;
        let mut open = None;
        for pos in line {
            match board.get(pos) {
                Square::Occupied(p) if p == player => held += 1,
                Square::Empty => open = Some(pos),
                Square::Occupied(_) => {}
            }
        }
        if held == 2
            && let Some(pos) = open
        {
            return Some(pos);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, player: Player, indices: &[usize]) {
        for &i in indices {
            board.set(
                Position::from_index(i).unwrap(),
                Square::Occupied(player),
            );
        }
    }

    #[test]
    fn test_completion_needs_two_held_and_one_open() {
        let mut board = Board::new();
        place(&mut board, Player::O, &[0]);
        assert_eq!(completion_for(&board, Player::O), None);

        place(&mut board, Player::O, &[1]);
        assert_eq!(
            completion_for(&board, Player::O),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_completion() {
        // O O X in the top row: nothing to complete.
        let mut board = Board::new();
        place(&mut board, Player::O, &[0, 1]);
        place(&mut board, Player::X, &[2]);
        assert_eq!(completion_for(&board, Player::O), None);
    }
}
