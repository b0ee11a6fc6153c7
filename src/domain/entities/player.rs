use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::input::{InputError, MoveInput};
use crate::domain::value_objects::{Chain, Hand, Move};
use crate::infrastructure::bot::strategies::MoveSelector;

/// Seat at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    Human,
    Computer,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::Human, PlayerId::Computer];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::Human => 0,
            PlayerId::Computer => 1,
        }
    }

    #[inline]
    pub fn other(self) -> Self {
        match self {
            PlayerId::Human => PlayerId::Computer,
            PlayerId::Computer => PlayerId::Human,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerId::Human => "human",
            PlayerId::Computer => "computer",
        }
    }
}

/// Human player, moves come from the console
#[derive(Debug)]
pub struct HumanState {
    pub name: String,
    pub hand: Hand,
}

/// Computer player, moves come from a strategy
pub struct ComputerState {
    pub name: String,
    pub hand: Hand,
    pub pause: bool,
    strategy: Box<dyn MoveSelector>,
}

impl fmt::Debug for ComputerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputerState")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("pause", &self.pause)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

#[derive(Debug)]
pub enum Player {
    Human(HumanState),
    Computer(ComputerState),
}

impl Player {
    pub fn human(name: impl Into<String>) -> Self {
        Player::Human(HumanState {
            name: name.into(),
            hand: Hand::new(),
        })
    }

    pub fn computer(name: impl Into<String>, strategy: Box<dyn MoveSelector>, pause: bool) -> Self {
        Player::Computer(ComputerState {
            name: name.into(),
            hand: Hand::new(),
            pause,
            strategy,
        })
    }

    pub fn id(&self) -> PlayerId {
        match self {
            Player::Human(_) => PlayerId::Human,
            Player::Computer(_) => PlayerId::Computer,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Player::Human(h) => &h.name,
            Player::Computer(c) => &c.name,
        }
    }

    pub fn hand(&self) -> &Hand {
        match self {
            Player::Human(h) => &h.hand,
            Player::Computer(c) => &c.hand,
        }
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        match self {
            Player::Human(h) => &mut h.hand,
            Player::Computer(c) => &mut c.hand,
        }
    }

    /// Pick the next move. Only this player's hand and the shared chain are
    /// visible here.
    pub async fn select_move(
        &mut self,
        chain: &Chain,
        input: &mut dyn MoveInput,
    ) -> Result<Move, InputError> {
        match self {
            Player::Human(human) => input.choose_move(&human.hand, chain).await,
            Player::Computer(computer) => {
                if computer.pause {
                    input.acknowledge().await?;
                }
                Ok(computer.strategy.select_move(&computer.hand, chain))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ChainError, End, Tile};
    use crate::infrastructure::bot::strategies::FrequencyStrategy;
    use async_trait::async_trait;

    /// Input that fails the test if the player asks it anything
    struct NoInput {
        acknowledged: usize,
    }

    #[async_trait]
    impl MoveInput for NoInput {
        async fn choose_move(&mut self, _hand: &Hand, _chain: &Chain) -> Result<Move, InputError> {
            panic!("computer must not read moves from the console");
        }

        async fn acknowledge(&mut self) -> Result<(), InputError> {
            self.acknowledged += 1;
            Ok(())
        }

        async fn reject_move(&mut self, _error: &ChainError) -> Result<(), InputError> {
            Ok(())
        }
    }

    #[test]
    fn test_player_id() {
        assert_eq!(PlayerId::Human.other(), PlayerId::Computer);
        assert_eq!(PlayerId::Computer.other(), PlayerId::Human);
        assert_eq!(PlayerId::Computer.index(), 1);
    }

    #[tokio::test]
    async fn test_computer_selects_with_strategy() {
        let mut chain = Chain::new();
        chain.append(End::Tail, Tile::new(6, 6).unwrap()).unwrap();

        let mut player = Player::computer("Computer", Box::new(FrequencyStrategy::new()), true);
        player.hand_mut().push(Tile::new(1, 2).unwrap());
        player.hand_mut().push(Tile::new(6, 3).unwrap());

        let mut input = NoInput { acknowledged: 0 };
        let mv = player.select_move(&chain, &mut input).await.unwrap();

        assert_eq!(
            mv,
            Move::Place {
                end: End::Head,
                tile: Tile::new(6, 3).unwrap()
            }
        );
        assert_eq!(input.acknowledged, 1);
        assert_eq!(player.id(), PlayerId::Computer);
        assert_eq!(player.name(), "Computer");
    }
}
