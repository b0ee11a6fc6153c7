//! Tile - A single domino piece of the double-six set
//!
//! A tile is an unordered pair of face values at rest. Once it is placed on
//! the chain it carries an orientation (left face, right face), but equality
//! and hashing ignore that orientation so a hand can always find the tile it
//! played.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Highest face value of the double-six set
pub const MAX_PIP: u8 = 6;
/// Number of tiles in the double-six set
pub const SET_SIZE: usize = 28;

/// Domino tile with an orientation
#[derive(Debug, Clone, Copy, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Tile {
    left: u8,
    right: u8,
}

impl Tile {
    /// Create a tile, rejecting faces above six
    pub fn new(left: u8, right: u8) -> Result<Self, TileError> {
        if left > MAX_PIP || right > MAX_PIP {
            return Err(TileError::OutOfRange { left, right });
        }
        Ok(Self { left, right })
    }

    #[inline]
    pub fn left(&self) -> u8 {
        self.left
    }

    #[inline]
    pub fn right(&self) -> u8 {
        self.right
    }

    /// Smaller face value
    #[inline]
    pub fn low(&self) -> u8 {
        self.left.min(self.right)
    }

    /// Larger face value
    #[inline]
    pub fn high(&self) -> u8 {
        self.left.max(self.right)
    }

    #[inline]
    pub fn faces(&self) -> [u8; 2] {
        [self.left, self.right]
    }

    #[inline]
    pub fn is_double(&self) -> bool {
        self.left == self.right
    }

    /// Check if either face shows `value`
    #[inline]
    pub fn has(&self, value: u8) -> bool {
        self.left == value || self.right == value
    }

    /// Same tile with its faces swapped
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.low() == other.low() && self.high() == other.high()
    }
}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.low().hash(state);
        self.high().hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}

impl TryFrom<(u8, u8)> for Tile {
    type Error = TileError;

    fn try_from((left, right): (u8, u8)) -> Result<Self, Self::Error> {
        Tile::new(left, right)
    }
}

impl From<Tile> for (u8, u8) {
    fn from(tile: Tile) -> Self {
        (tile.left, tile.right)
    }
}

/// Generate the 28 tiles of the double-six set in `(i, j)` order, `i <= j`
pub fn double_six_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(SET_SIZE);
    for left in 0..=MAX_PIP {
        for right in left..=MAX_PIP {
            tiles.push(Tile { left, right });
        }
    }
    tiles
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    #[error("Tile out of range: {left}-{right}")]
    OutOfRange { left: u8, right: u8 },
}
