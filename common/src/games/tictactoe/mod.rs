mod board;
mod bot;
mod game_state;
mod messages;
mod settings;
mod types;
mod win_detector;

pub use board::{get_available_moves, to_row_col, Board, BOARD_SIDE, CELL_COUNT, CENTER};
pub use bot::{select_move, select_move_with_rule, IndexProvider, MoveRule};
pub use game_state::TicTacToeGameState;
pub use messages::{pick_snarky_message, status_message, SNARKY_MESSAGES};
pub use settings::{TicTacToeSettings, DEFAULT_THINKING_DELAY_MS};
pub use types::{GameStatus, Mark, Phase, Player};
pub use win_detector::{check_win, check_win_with_line, find_two_in_a_row, LINES};
