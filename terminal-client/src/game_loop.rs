use std::io::Write;
use std::time::Duration;

use common::debug_log;
use common::games::SessionRng;
use common::games::tictactoe::{status_message, GameStatus, Phase, TicTacToeGameState};
use tokio::sync::mpsc;

use crate::render::{parse_command, render_board, render_winning_line, Command};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub human_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

impl ScoreBoard {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::HumanWon => self.human_wins += 1,
            GameStatus::OpponentWon => self.opponent_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    AwaitInput,
    OpponentTurn,
    Quit,
}

pub struct TerminalSession<W: Write> {
    state: TicTacToeGameState,
    rng: SessionRng,
    score: ScoreBoard,
    out: W,
}

impl<W: Write> TerminalSession<W> {
    pub fn new(rng: SessionRng, out: W) -> Self {
        Self {
            state: TicTacToeGameState::new(),
            rng,
            score: ScoreBoard::default(),
            out,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn score(&self) -> ScoreBoard {
        self.score
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn show(&mut self) -> Result<(), String> {
        let message = status_message(self.state.phase(), &mut self.rng);
        writeln!(self.out, "\n{}\n", render_board(self.state.board())).map_err(|e| e.to_string())?;
        if let Some(line) = self.state.winning_line() {
            writeln!(self.out, "{}", render_winning_line(line)).map_err(|e| e.to_string())?;
        }
        writeln!(self.out, "{}", message).map_err(|e| e.to_string())?;
        if self.state.status().is_over() {
            writeln!(self.out, "Type r to play again or q to quit.").map_err(|e| e.to_string())?;
        }
        self.out.flush().map_err(|e| e.to_string())
    }

    fn say(&mut self, message: &str) -> Result<(), String> {
        writeln!(self.out, "{}", message).map_err(|e| e.to_string())
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Step, String> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(message) => {
                self.say(&message)?;
                return Ok(Step::AwaitInput);
            }
        };

        match command {
            Command::Quit => Ok(Step::Quit),
            Command::Restart => {
                self.state.restart();
                debug_log!("Game restarted");
                self.show()?;
                Ok(Step::AwaitInput)
            }
            Command::Place(index) => match self.state.place_human_mark(index) {
                Err(message) => {
                    self.say(&message)?;
                    Ok(Step::AwaitInput)
                }
                Ok(Phase::OpponentThinking) => {
                    self.show()?;
                    Ok(Step::OpponentTurn)
                }
                Ok(_) => {
                    self.score.record(self.state.status());
                    self.show()?;
                    Ok(Step::AwaitInput)
                }
            },
        }
    }

    pub fn finish_opponent_turn(&mut self) -> Result<(), String> {
        self.state.apply_opponent_move(&mut self.rng)?;
        self.score.record(self.state.status());
        self.show()
    }

    pub fn print_score(&mut self) -> Result<(), String> {
        let score = self.score;
        writeln!(
            self.out,
            "You: {}  Computer: {}  Draws: {}",
            score.human_wins, score.opponent_wins, score.draws
        )
        .map_err(|e| e.to_string())
    }
}

/// Returns how many pending lines were discarded.
fn drain_pending_input(input: &mut mpsc::Receiver<String>) -> usize {
    let mut dropped = 0;
    while input.try_recv().is_ok() {
        dropped += 1;
    }
    dropped
}

/// Drives the session until `q` or end of input. Lines typed while the opponent is
/// thinking are dropped.
pub async fn run_game_loop<W: Write>(
    session: &mut TerminalSession<W>,
    mut input: mpsc::Receiver<String>,
    thinking_delay: Duration,
) -> Result<ScoreBoard, String> {
    session.show()?;

    while let Some(line) = input.recv().await {
        match session.handle_line(&line)? {
            Step::AwaitInput => {}
            Step::Quit => break,
            Step::OpponentTurn => {
                tokio::time::sleep(thinking_delay).await;
                let dropped = drain_pending_input(&mut input);
                if dropped > 0 {
                    debug_log!("Ignored {} line(s) typed while the opponent was thinking", dropped);
                }
                session.finish_opponent_turn()?;
            }
        }
    }

    session.print_score()?;
    Ok(session.score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{Mark, SNARKY_MESSAGES};

    fn session() -> TerminalSession<Vec<u8>> {
        TerminalSession::new(SessionRng::new(17), Vec::new())
    }

    fn output(session: TerminalSession<Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_invalid_input_keeps_waiting() {
        let mut session = session();
        assert_eq!(session.handle_line("banana"), Ok(Step::AwaitInput));
        assert!(output(session).contains("Enter a cell number 1-9"));
    }

    #[test]
    fn test_human_move_starts_opponent_turn() {
        let mut session = session();
        assert_eq!(session.handle_line("1"), Ok(Step::OpponentTurn));
        assert_eq!(session.state().board().get(0), Some(Mark::X));
        assert!(output(session).contains("Computer is thinking..."));
    }

    #[test]
    fn test_opponent_loss_is_scored_and_taunted() {
        let mut session = session();
        for line in ["1", "2", "9"] {
            assert_eq!(session.handle_line(line), Ok(Step::OpponentTurn));
            session.finish_opponent_turn().unwrap();
        }
        assert_eq!(session.state().status(), GameStatus::OpponentWon);
        assert_eq!(session.score().opponent_wins, 1);

        let text = output(session);
        assert!(SNARKY_MESSAGES.iter().any(|message| text.contains(message)));
        assert!(text.contains("Winning line: 3-5-7"));
    }

    #[test]
    fn test_move_after_game_over_is_refused_until_restart() {
        let mut session = session();
        for line in ["1", "2", "9"] {
            session.handle_line(line).unwrap();
            session.finish_opponent_turn().unwrap();
        }
        assert_eq!(session.handle_line("4"), Ok(Step::AwaitInput));
        assert_eq!(session.state().board().get(3), Some(Mark::Empty));

        assert_eq!(session.handle_line("r"), Ok(Step::AwaitInput));
        assert_eq!(session.state().phase(), Phase::WaitingForHuman);
        assert_eq!(session.handle_line("4"), Ok(Step::OpponentTurn));
        assert!(output(session).contains("Game is already over"));
    }

    #[test]
    fn test_quit_stops() {
        let mut session = session();
        assert_eq!(session.handle_line("q"), Ok(Step::Quit));
    }

    #[tokio::test]
    async fn test_lines_typed_while_thinking_are_dropped() {
        let (tx, rx) = mpsc::channel(8);
        for line in ["1", "2", "3"] {
            tx.send(line.to_string()).await.unwrap();
        }
        drop(tx);

        let mut session = session();
        let score = run_game_loop(&mut session, rx, Duration::from_millis(1)).await.unwrap();

        let board = session.state().board();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(4), Some(Mark::O));
        assert_eq!(board.get(1), Some(Mark::Empty));
        assert_eq!(board.get(2), Some(Mark::Empty));
        assert_eq!(session.state().phase(), Phase::WaitingForHuman);
        assert_eq!(score, ScoreBoard::default());
    }

    #[tokio::test]
    async fn test_loop_ends_on_quit_and_prints_score() {
        let (tx, rx) = mpsc::channel(8);
        tx.send("q".to_string()).await.unwrap();

        let mut session = session();
        let score = run_game_loop(&mut session, rx, Duration::ZERO).await.unwrap();
        assert_eq!(score, ScoreBoard::default());
        drop(tx);

        let text = output(session);
        assert!(text.contains("Your turn! (X)"));
        assert!(text.contains("You: 0  Computer: 0  Draws: 0"));
    }
}
