use async_trait::async_trait;

use crate::domain::value_objects::{Chain, ChainError, Hand, Move};

/// Source of the human player's decisions
#[async_trait]
pub trait MoveInput: Send {
    /// Ask for a move until a well-formed one is entered
    async fn choose_move(&mut self, hand: &Hand, chain: &Chain) -> Result<Move, InputError>;

    /// Wait for the player before the computer moves
    async fn acknowledge(&mut self) -> Result<(), InputError>;

    /// Report a placement the chain refused; a new move is asked next
    async fn reject_move(&mut self, error: &ChainError) -> Result<(), InputError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Not a number: {0:?}")]
    NotANumber(String),
    #[error("Tile {index} is out of range for a hand of {hand_size}")]
    OutOfRange { index: i64, hand_size: usize },
    #[error("Input closed")]
    Closed,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Bad entries are re-prompted, never surfaced
    pub fn is_recoverable(&self) -> bool {
        matches!(self, InputError::NotANumber(_) | InputError::OutOfRange { .. })
    }
}
