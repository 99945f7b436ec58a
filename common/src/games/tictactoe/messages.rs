use super::bot::IndexProvider;
use super::types::Phase;

pub const YOUR_TURN: &str = "Your turn! (X)";
pub const THINKING: &str = "Computer is thinking...";
pub const HUMAN_WON: &str = "Congratulations! You won!";
pub const DRAW: &str = "It's a draw!";

pub const SNARKY_MESSAGES: [&str; 7] = [
    "Ha! Better luck next time, human!",
    "Robots: 1, Humans: 0. Just saying...",
    "Did you even try?",
    "Maybe stick to rock, paper, scissors?",
    "AI supremacy confirmed!",
    "Was that your best move? Really?",
    "Even a random number generator could do better!",
];

pub fn pick_snarky_message<R: IndexProvider + ?Sized>(rng: &mut R) -> &'static str {
    SNARKY_MESSAGES[rng.pick_index(SNARKY_MESSAGES.len())]
}

/// Status line for the current phase. Loss messages are drawn from `rng`.
pub fn status_message<R: IndexProvider + ?Sized>(phase: Phase, rng: &mut R) -> &'static str {
    match phase {
        Phase::WaitingForHuman => YOUR_TURN,
        Phase::OpponentThinking => THINKING,
        Phase::HumanWon => HUMAN_WON,
        Phase::Draw => DRAW,
        Phase::OpponentWon => pick_snarky_message(rng),
    }
}
