use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const DEFAULT_THINKING_DELAY_MS: u64 = 500;
pub const MAX_THINKING_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSettings {
    /// Pause before the opponent's move is applied. Pacing only.
    pub thinking_delay_ms: u64,
}

impl TicTacToeSettings {
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            thinking_delay_ms: DEFAULT_THINKING_DELAY_MS,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(format!(
                "thinking_delay_ms must not exceed {}",
                MAX_THINKING_DELAY_MS
            ));
        }
        Ok(())
    }
}
