//! Stock - The boneyard of undealt tiles

use std::fmt;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::tile::{double_six_set, Tile, SET_SIZE};

pub struct Stock {
    // Drawn from the back
    tiles: Vec<Tile>,
    rng: ChaCha8Rng,
}

impl Stock {
    /// Full shuffled set. A seed makes every reshuffle reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut stock = Self {
            tiles: Vec::with_capacity(SET_SIZE),
            rng,
        };
        stock.reset();
        stock
    }

    /// Stock that hands out `tiles` in the given order. `reset` still
    /// regenerates a shuffled full set.
    pub fn stacked(tiles: Vec<Tile>) -> Self {
        let mut tiles = tiles;
        tiles.reverse();
        Self {
            tiles,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Take one tile, `None` once the stock is exhausted
    #[inline]
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    #[inline]
    pub fn remaining_count(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Regenerate and reshuffle the full 28-tile set
    pub fn reset(&mut self) {
        self.tiles.clear();
        self.tiles.extend(double_six_set());
        self.tiles.shuffle(&mut self.rng);
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl fmt::Debug for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stock")
            .field("remaining", &self.tiles.len())
            .finish()
    }
}
