//! Bot strategies module
//!
//! Contains the computer player's move selection strategies.

mod frequency_bot;
mod random_bot;

pub use frequency_bot::*;
pub use random_bot::*;

use crate::domain::value_objects::{Chain, Hand, Move};

/// Move selection strategy of a computer player.
///
/// A strategy sees its own hand and the shared chain only; the opponent's
/// hand is never passed in.
pub trait MoveSelector: Send {
    /// Strategy name for logs
    fn name(&self) -> &'static str;

    /// Pick a placement, or `Move::Pass` to draw from the stock instead.
    /// The returned placement must be legal on `chain`.
    fn select_move(&mut self, hand: &Hand, chain: &Chain) -> Move;
}

/// Strategy type enum for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyType {
    /// Highest combined face frequency first
    Frequency,
    /// Any legal placement at random
    Random,
}

impl StrategyType {
    pub fn build(self, seed: Option<u64>) -> Box<dyn MoveSelector> {
        match self {
            StrategyType::Frequency => Box::new(FrequencyStrategy::new()),
            StrategyType::Random => Box::new(RandomStrategy::new(seed)),
        }
    }
}
