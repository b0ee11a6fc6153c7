use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::domain::value_objects::{Chain, Stock, Tile};

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundStatus {
    InProgress,
    Won(PlayerId),
    /// Nobody can move any more: the round is a draw
    Blocked,
}

impl RoundStatus {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::InProgress => "inProgress",
            RoundStatus::Won(_) => "won",
            RoundStatus::Blocked => "blocked",
        }
    }
}

/// Everything one round owns: the chain, both players, the stock and whose
/// turn it is
#[derive(Debug)]
pub struct RoundState {
    pub chain: Chain,
    // Indexed by PlayerId::index
    pub players: [Player; 2],
    pub active: PlayerId,
    pub stock: Stock,
    pub status: RoundStatus,
    pub turn_count: u32,
    /// Turns in a row that ended in a pass with nothing left to draw
    pub consecutive_passes: u32,
}

impl RoundState {
    pub fn new(human: Player, computer: Player, stock: Stock) -> Self {
        debug_assert_eq!(human.id(), PlayerId::Human);
        debug_assert_eq!(computer.id(), PlayerId::Computer);
        Self {
            chain: Chain::new(),
            players: [human, computer],
            active: PlayerId::Human,
            stock,
            status: RoundStatus::InProgress,
            turn_count: 0,
            consecutive_passes: 0,
        }
    }

    #[inline]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[inline]
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    #[inline]
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Hand the turn to the other player
    #[inline]
    pub fn switch_turn(&mut self) {
        self.active = self.active.other();
    }

    /// Put every tile back in a reshuffled stock
    pub fn reset_for_redeal(&mut self) {
        self.chain.clear();
        for player in &mut self.players {
            player.hand_mut().clear();
        }
        self.stock.reset();
        self.active = PlayerId::Human;
        self.status = RoundStatus::InProgress;
        self.turn_count = 0;
        self.consecutive_passes = 0;
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            stock_size: self.stock.remaining_count(),
            human_tiles: self.player(PlayerId::Human).hand().len(),
            computer_tiles: self.player(PlayerId::Computer).hand().len(),
            chain: self.chain.tiles(),
            active: self.active,
            status: self.status,
            turn: self.turn_count,
        }
    }
}

/// Serializable view of a round, used for structured logs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub stock_size: usize,
    pub human_tiles: usize,
    pub computer_tiles: usize,
    pub chain: Vec<Tile>,
    pub active: PlayerId,
    pub status: RoundStatus,
    pub turn: u32,
}

impl RoundSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
