use serde::{Deserialize, Serialize};

use super::chain::End;
use super::tile::Tile;

/// Move selected for a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Move {
    Place { end: End, tile: Tile },
    /// Draw from the stock instead of playing
    Pass,
}

/// What a resolved turn did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum TurnOutcome {
    /// Tile as oriented on the chain
    Placed { end: End, tile: Tile },
    Drew { tile: Tile },
    /// Passed with an empty stock
    Passed,
}
