//! Frequency bot strategy
//!
//! Plays the tile whose faces are most common across its own hand and the
//! chain. Getting rid of crowded values early keeps the rarer ones, and with
//! them more ways to answer later, in hand.

use super::MoveSelector;
use crate::domain::value_objects::{Chain, End, Hand, Move, Tile, MAX_PIP};

/// Face counts, indexed by face value
pub type FaceFrequencies = [u32; MAX_PIP as usize + 1];

/// Frequency heuristic strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyStrategy;

impl FrequencyStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Count every face of every tile in hand and chain. Doubles count twice.
    pub fn face_frequencies(hand: &Hand, chain: &Chain) -> FaceFrequencies {
        let mut frequencies = [0u32; MAX_PIP as usize + 1];
        for tile in hand.iter().chain(chain.iter()) {
            for face in tile.faces() {
                frequencies[face as usize] += 1;
            }
        }
        frequencies
    }

    /// Hand tiles by descending score; equal scores keep their hand order
    pub fn rank_tiles(hand: &Hand, frequencies: &FaceFrequencies) -> Vec<(Tile, u32)> {
        let mut ranked: Vec<(Tile, u32)> = hand
            .iter()
            .map(|&tile| {
                let score = frequencies[tile.low() as usize] + frequencies[tile.high() as usize];
                (tile, score)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl MoveSelector for FrequencyStrategy {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn select_move(&mut self, hand: &Hand, chain: &Chain) -> Move {
        let (Some(head), Some(tail)) = (chain.head(), chain.tail()) else {
            return Move::Pass;
        };

        let frequencies = Self::face_frequencies(hand, chain);

        for (tile, _) in Self::rank_tiles(hand, &frequencies) {
            if tile.has(head) {
                return Move::Place {
                    end: End::Head,
                    tile,
                };
            }
            if tile.has(tail) {
                return Move::Place {
                    end: End::Tail,
                    tile,
                };
            }
        }

        Move::Pass
    }
}
