use crate::debug_log;
use super::board::{to_row_col, Board};
use super::bot::{select_move_with_rule, IndexProvider, MoveRule};
use super::types::{GameStatus, Mark, Phase, Player};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    phase: Phase,
    last_move: Option<usize>,
    winning_line: Option<[usize; 3]>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::WaitingForHuman,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> GameStatus {
        self.phase.status()
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    pub fn accepts_human_input(&self) -> bool {
        self.phase == Phase::WaitingForHuman
    }

    /// Applies the human's mark and returns the phase the game moved to.
    pub fn place_human_mark(&mut self, index: usize) -> Result<Phase, String> {
        match self.phase {
            Phase::WaitingForHuman => {}
            Phase::OpponentThinking => return Err("Not your turn".to_string()),
            _ => return Err("Game is already over".to_string()),
        }

        self.board.place(index, Player::Human.mark())?;
        self.last_move = Some(index);
        self.phase = self.evaluate(Phase::OpponentThinking);
        debug_log!("Human marked {:?}, phase {:?}", to_row_col(index), self.phase);

        Ok(self.phase)
    }

    /// Runs the move selector and applies its pick. Only valid while the opponent is thinking,
    /// which guarantees at least one empty cell.
    pub fn apply_opponent_move<R: IndexProvider + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(usize, MoveRule), String> {
        if self.phase != Phase::OpponentThinking {
            return Err(format!("Opponent cannot move in phase {:?}", self.phase));
        }

        let (index, rule) = select_move_with_rule(&self.board, rng);
        self.board.place(index, Player::Opponent.mark())?;
        self.last_move = Some(index);
        self.phase = self.evaluate(Phase::WaitingForHuman);
        debug_log!("Opponent marked {:?} by {:?} rule, phase {:?}", to_row_col(index), rule, self.phase);

        Ok((index, rule))
    }

    pub fn restart(&mut self) {
        self.board.clear();
        self.phase = Phase::WaitingForHuman;
        self.last_move = None;
        self.winning_line = None;
    }

    fn evaluate(&mut self, next: Phase) -> Phase {
        if let Some((mark, line)) = check_win_with_line(&self.board) {
            self.winning_line = Some(line);
            return match mark {
                Mark::X => Phase::HumanWon,
                Mark::O => Phase::OpponentWon,
                Mark::Empty => unreachable!(),
            };
        }

        if self.board.is_full() {
            return Phase::Draw;
        }

        next
    }
}
