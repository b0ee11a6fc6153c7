//! Random bot strategy
//!
//! Simple bot that makes random but legal plays.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::MoveSelector;
use crate::domain::value_objects::{Chain, Hand, Move};

/// Easy opponent: any legal placement, chosen uniformly
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new(None)
    }
}

impl MoveSelector for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_move(&mut self, hand: &Hand, chain: &Chain) -> Move {
        hand.placements(chain)
            .choose(&mut self.rng)
            .map(|&(end, tile)| Move::Place { end, tile })
            .unwrap_or(Move::Pass)
    }
}
