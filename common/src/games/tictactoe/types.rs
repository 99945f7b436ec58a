use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, " "),
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Who is sitting at the board. The human always plays X.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    pub fn mark(&self) -> Mark {
        match self {
            Player::Human => Mark::X,
            Player::Opponent => Mark::O,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    HumanWon,
    OpponentWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    WaitingForHuman,
    /// Opponent move is pending; human input is masked until it is applied.
    OpponentThinking,
    HumanWon,
    OpponentWon,
    Draw,
}

impl Phase {
    pub fn status(&self) -> GameStatus {
        match self {
            Phase::WaitingForHuman | Phase::OpponentThinking => GameStatus::InProgress,
            Phase::HumanWon => GameStatus::HumanWon,
            Phase::OpponentWon => GameStatus::OpponentWon,
            Phase::Draw => GameStatus::Draw,
        }
    }
}
