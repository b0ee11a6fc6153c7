use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::chain::{Chain, End};
use super::tile::Tile;

/// Inline capacity of a hand (7 dealt plus draws rarely exceed this)
pub const MAX_HAND_SIZE: usize = 16;

/// Tiles held by one player, in the order they were received
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    tiles: SmallVec<[Tile; MAX_HAND_SIZE]>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Remove `tile` by value, whatever its orientation
    pub fn remove(&mut self, tile: &Tile) -> bool {
        match self.tiles.iter().position(|t| t == tile) {
            Some(pos) => {
                self.tiles.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Tile at a zero-based position
    #[inline]
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    #[inline]
    pub fn contains(&self, tile: &Tile) -> bool {
        self.tiles.contains(tile)
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

    #[inline]
    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Highest-valued double held, if any
    pub fn highest_double(&self) -> Option<Tile> {
        self.tiles
            .iter()
            .filter(|t| t.is_double())
            .max_by_key(|t| t.high())
            .copied()
    }

    /// Every legal `(end, tile)` placement, head before tail for each tile
    pub fn placements(&self, chain: &Chain) -> Vec<(End, Tile)> {
        let mut placements = Vec::new();
        for &tile in &self.tiles {
            for end in [End::Head, End::Tail] {
                if chain.matches(end, &tile) {
                    placements.push((end, tile));
                }
            }
        }
        placements
    }

    /// Check if any tile fits either open end
    pub fn has_playable(&self, chain: &Chain) -> bool {
        self.tiles
            .iter()
            .any(|t| chain.matches(End::Head, t) || chain.matches(End::Tail, t))
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
