//! Chain - The ordered line of played tiles (the "snake")
//!
//! Tiles are stored oriented, so that for every adjacent pair the right face
//! of the left tile equals the left face of the right tile.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// Tiles shown before the chain view is elided
pub const DEFAULT_MAX_VISIBLE: usize = 6;
/// Tiles shown on each side of an elided chain
const EDGE_VISIBLE: usize = 3;
/// Tile-ends showing the same value that lock a closed chain
pub const LOCK_THRESHOLD: usize = 8;

/// Open end of the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum End {
    Head,
    Tail,
}

impl End {
    pub fn as_str(&self) -> &'static str {
        match self {
            End::Head => "head",
            End::Tail => "tail",
        }
    }
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display token of a chain view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainToken {
    Tile(Tile),
    Elided,
}

impl fmt::Display for ChainToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainToken::Tile(tile) => write!(f, "{}", tile),
            ChainToken::Elided => f.write_str("..."),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Chain {
    tiles: VecDeque<Tile>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left value of the first tile
    #[inline]
    pub fn head(&self) -> Option<u8> {
        self.tiles.front().map(|t| t.left())
    }

    /// Right value of the last tile
    #[inline]
    pub fn tail(&self) -> Option<u8> {
        self.tiles.back().map(|t| t.right())
    }

    #[inline]
    pub fn end_value(&self, end: End) -> Option<u8> {
        match end {
            End::Head => self.head(),
            End::Tail => self.tail(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn tiles(&self) -> Vec<Tile> {
        self.tiles.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Check if `tile` can be attached at `end`. An empty chain has no open
    /// ends, so nothing matches it.
    #[inline]
    pub fn matches(&self, end: End, tile: &Tile) -> bool {
        self.end_value(end).is_some_and(|value| tile.has(value))
    }

    /// Attach `tile` at `end`, flipping it so the matching face touches the
    /// chain. The first tile is placed as given. Returns the oriented tile.
    pub fn append(&mut self, end: End, tile: Tile) -> Result<Tile, ChainError> {
        let placed = match (end, self.end_value(end)) {
            (_, None) => tile,
            (End::Head, Some(value)) if tile.right() == value => tile,
            (End::Head, Some(value)) if tile.left() == value => tile.flipped(),
            (End::Tail, Some(value)) if tile.left() == value => tile,
            (End::Tail, Some(value)) if tile.right() == value => tile.flipped(),
            (_, Some(value)) => return Err(ChainError::IllegalMove { tile, end, value }),
        };

        match end {
            End::Head => self.tiles.push_front(placed),
            End::Tail => self.tiles.push_back(placed),
        }

        Ok(placed)
    }

    /// Count tile-ends showing `value` (a double counts twice)
    pub fn count_value(&self, value: u8) -> usize {
        self.tiles
            .iter()
            .map(|t| t.faces().iter().filter(|&&face| face == value).count())
            .sum()
    }

    /// Closed chain whose end value is exhausted: head equals tail and that
    /// value shows on at least eight tile-ends.
    pub fn is_locked(&self) -> bool {
        match (self.head(), self.tail()) {
            (Some(head), Some(tail)) if head == tail => self.count_value(head) >= LOCK_THRESHOLD,
            _ => false,
        }
    }

    /// Chain view: every tile when it fits in `max_visible`, otherwise the
    /// first and last three around an elision marker.
    ///
    /// A `max_visible` below six (`DEFAULT_MAX_VISIBLE`) is treated as six,
    /// so chains of up to six tiles always render in full.
    pub fn render(&self, max_visible: usize) -> Vec<ChainToken> {
        if self.tiles.len() <= max_visible.max(2 * EDGE_VISIBLE) {
            return self.tiles.iter().copied().map(ChainToken::Tile).collect();
        }

        let mut tokens = Vec::with_capacity(2 * EDGE_VISIBLE + 1);
        tokens.extend(self.tiles.iter().take(EDGE_VISIBLE).copied().map(ChainToken::Tile));
        tokens.push(ChainToken::Elided);
        tokens.extend(
            self.tiles
                .iter()
                .skip(self.tiles.len() - EDGE_VISIBLE)
                .copied()
                .map(ChainToken::Tile),
        );
        tokens
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.render(DEFAULT_MAX_VISIBLE) {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("Tile {tile} does not match the {end} value {value}")]
    IllegalMove { tile: Tile, end: End, value: u8 },
}
