use serde::{Deserialize, Serialize};

use super::chain::DEFAULT_MAX_VISIBLE;

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    /// Name shown for the human player
    pub player_name: String,
    /// Name shown for the computer player
    pub computer_name: String,
    /// Chain length shown before the view is elided (at least 6)
    pub max_visible: usize,
    /// Wait for Enter before each computer move
    pub pause_for_computer: bool,
    /// Stock shuffle seed
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            computer_name: "Computer".to_string(),
            max_visible: DEFAULT_MAX_VISIBLE,
            pause_for_computer: true,
            seed: None,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.player_name.trim().is_empty() || self.computer_name.trim().is_empty() {
            return Err("Player names must not be empty");
        }
        if self.player_name == self.computer_name {
            return Err("Player names must differ");
        }
        if self.max_visible < DEFAULT_MAX_VISIBLE {
            return Err("Chain view must show at least 6 tiles");
        }
        Ok(())
    }
}
