use super::board::{get_available_moves, Board, CENTER};
use super::types::Player;
use super::win_detector::find_two_in_a_row;

/// Source of uniform indices in `0..len`. `len` is always non-zero.
pub trait IndexProvider {
    fn pick_index(&mut self, len: usize) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRule {
    Win,
    Block,
    Center,
    Random,
}

/// Picks the opponent's next cell. The board must have at least one empty cell.
pub fn select_move<R: IndexProvider + ?Sized>(board: &Board, rng: &mut R) -> usize {
    select_move_with_rule(board, rng).0
}

/// One ply of lookahead only: win, then block, then center, then a random empty cell.
pub fn select_move_with_rule<R: IndexProvider + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> (usize, MoveRule) {
    if let Some(index) = find_two_in_a_row(board, Player::Opponent.mark()) {
        return (index, MoveRule::Win);
    }

    if let Some(index) = find_two_in_a_row(board, Player::Human.mark()) {
        return (index, MoveRule::Block);
    }

    if board.is_empty_at(CENTER) {
        return (CENTER, MoveRule::Center);
    }

    let available_moves = get_available_moves(board);
    debug_assert!(!available_moves.is_empty(), "select_move called on a full board");
    let idx = rng.pick_index(available_moves.len());
    (available_moves[idx], MoveRule::Random)
}
