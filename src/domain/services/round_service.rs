//! Round service - Core rules of a dominoes round
//!
//! Dealing, first-player resolution, move application and terminal checks.
//! The turn loop that drives these lives in the application layer.

use crate::domain::entities::{PlayerId, RoundState, RoundStatus};
use crate::domain::input::InputError;
use crate::domain::value_objects::{ChainError, End, Move, Tile, TurnOutcome};

/// Tiles dealt to each player
pub const HAND_SIZE: usize = 7;
/// Re-deals tried before giving up on finding a double
pub const MAX_REDEALS: u32 = 1_000;

/// Deal `HAND_SIZE` tiles to each player, alternating seats
pub fn deal(state: &mut RoundState) {
    for _ in 0..HAND_SIZE {
        for id in PlayerId::ALL {
            if let Some(tile) = state.stock.draw() {
                state.player_mut(id).hand_mut().push(tile);
            }
        }
    }
}

/// Opening play of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstPlay {
    pub player: PlayerId,
    pub tile: Tile,
    pub redeals: u32,
}

/// Seed the chain with the highest double held by either player; its holder's
/// opponent moves next. Without any double the round is re-dealt.
pub fn resolve_first_player(state: &mut RoundState) -> Result<FirstPlay, RoundError> {
    let mut redeals = 0;

    loop {
        let seed = PlayerId::ALL
            .into_iter()
            .filter_map(|id| state.player(id).hand().highest_double().map(|tile| (id, tile)))
            .max_by_key(|(_, tile)| tile.high());

        if let Some((player, tile)) = seed {
            state.player_mut(player).hand_mut().remove(&tile);
            state.chain.clear();
            state.chain.append(End::Tail, tile)?;
            state.active = player.other();
            return Ok(FirstPlay {
                player,
                tile,
                redeals,
            });
        }

        if redeals >= MAX_REDEALS {
            return Err(RoundError::NoDoubleDealt { attempts: redeals });
        }
        redeals += 1;
        tracing::debug!(redeals, "No double dealt, re-dealing");

        state.reset_for_redeal();
        deal(state);
    }
}

/// Apply the active player's move. Placements go through the chain's
/// legality check and then leave the mover's hand; a pass draws one tile
/// when the stock has any.
pub fn apply_move(state: &mut RoundState, mv: Move) -> Result<TurnOutcome, RoundError> {
    let mover = state.active;

    match mv {
        Move::Place { end, tile } => {
            if !state.player(mover).hand().contains(&tile) {
                return Err(RoundError::TileNotInHand(tile));
            }
            let placed = state.chain.append(end, tile)?;
            state.player_mut(mover).hand_mut().remove(&tile);
            state.consecutive_passes = 0;
            Ok(TurnOutcome::Placed { end, tile: placed })
        }
        Move::Pass => match state.stock.draw() {
            Some(tile) => {
                state.player_mut(mover).hand_mut().push(tile);
                state.consecutive_passes = 0;
                Ok(TurnOutcome::Drew { tile })
            }
            None => {
                state.consecutive_passes += 1;
                Ok(TurnOutcome::Passed)
            }
        },
    }
}

/// Check whether the round is over
/// A round ends when:
/// 1. A hand is empty: that player won
/// 2. The chain is locked, the stock is empty and no hand holds a tile
///    matching either end, or both players just passed in a row with
///    nothing to draw: the round is blocked
pub fn check_terminal(state: &RoundState) -> RoundStatus {
    if let Some(winner) = PlayerId::ALL
        .into_iter()
        .find(|&id| state.player(id).hand().is_empty())
    {
        return RoundStatus::Won(winner);
    }

    if state.chain.is_locked() || state.consecutive_passes >= PlayerId::ALL.len() as u32 {
        return RoundStatus::Blocked;
    }

    let anyone_can_move = PlayerId::ALL
        .into_iter()
        .any(|id| state.player(id).hand().has_playable(&state.chain));
    if state.stock.is_empty() && !anyone_can_move {
        return RoundStatus::Blocked;
    }

    RoundStatus::InProgress
}

#[derive(Debug, thiserror::Error)]
pub enum RoundError {
    #[error("Illegal move: {0}")]
    IllegalMove(#[from] ChainError),
    #[error("Tile {0} is not in the mover's hand")]
    TileNotInHand(Tile),
    #[error("Computer strategy chose an illegal move: {0}")]
    InconsistentMove(ChainError),
    #[error("No double dealt after {attempts} re-deals")]
    NoDoubleDealt { attempts: u32 },
    #[error("Round exceeded {0} turns")]
    TurnLimit(u32),
    #[error("Input error: {0}")]
    Input(#[from] InputError),
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Player;
    use crate::domain::value_objects::{Stock, SET_SIZE};
    use crate::infrastructure::bot::strategies::FrequencyStrategy;

    fn tile(a: u8, b: u8) -> Tile {
        Tile::new(a, b).unwrap()
    }

    fn state_with(stock: Stock) -> RoundState {
        RoundState::new(
            Player::human("Player"),
            Player::computer("Computer", Box::new(FrequencyStrategy::new()), false),
            stock,
        )
    }

    fn give(state: &mut RoundState, id: PlayerId, tiles: &[Tile]) {
        let hand = state.player_mut(id).hand_mut();
        hand.clear();
        for &t in tiles {
            hand.push(t);
        }
    }

    #[test]
    fn test_deal_leaves_fourteen() {
        let mut state = state_with(Stock::new(Some(42)));
        deal(&mut state);

        assert_eq!(state.player(PlayerId::Human).hand().len(), HAND_SIZE);
        assert_eq!(state.player(PlayerId::Computer).hand().len(), HAND_SIZE);
        assert_eq!(state.stock.remaining_count(), SET_SIZE - 2 * HAND_SIZE);
    }

    #[test]
    fn test_first_player_seeds_highest_double() {
        let mut state = state_with(Stock::stacked(Vec::new()));
        give(&mut state, PlayerId::Human, &[tile(2, 2), tile(1, 2), tile(0, 5)]);
        give(&mut state, PlayerId::Computer, &[tile(1, 3), tile(4, 6), tile(0, 1)]);

        let first = resolve_first_player(&mut state).unwrap();

        assert_eq!(first.player, PlayerId::Human);
        assert_eq!(first.tile, tile(2, 2));
        assert_eq!(first.redeals, 0);
        assert_eq!(state.chain.tiles(), vec![tile(2, 2)]);
        assert_eq!(state.active, PlayerId::Computer);
        assert_eq!(
            state.player(PlayerId::Human).hand().as_slice(),
            &[tile(1, 2), tile(0, 5)]
        );
    }

    #[test]
    fn test_first_player_compares_both_hands() {
        let mut state = state_with(Stock::stacked(Vec::new()));
        give(&mut state, PlayerId::Human, &[tile(2, 2), tile(5, 5)]);
        give(&mut state, PlayerId::Computer, &[tile(6, 6), tile(0, 0)]);

        let first = resolve_first_player(&mut state).unwrap();

        assert_eq!(first.player, PlayerId::Computer);
        assert_eq!(first.tile, tile(6, 6));
        assert_eq!(state.active, PlayerId::Human);
        assert_eq!(state.player(PlayerId::Computer).hand().len(), 1);
    }

    #[test]
    fn test_redeal_without_doubles() {
        // Neither hand holds a double: the round must be re-dealt from a
        // fresh stock until someone does
        let mut state = state_with(Stock::new(Some(9)));
        give(&mut state, PlayerId::Human, &[tile(0, 1), tile(2, 3)]);
        give(&mut state, PlayerId::Computer, &[tile(4, 5), tile(1, 6)]);

        let first = resolve_first_player(&mut state).unwrap();

        assert!(first.redeals >= 1);
        assert!(first.tile.is_double());
        assert_eq!(state.chain.len(), 1);
        assert_eq!(state.active, first.player.other());

        let held: usize = PlayerId::ALL
            .iter()
            .map(|&id| state.player(id).hand().len())
            .sum();
        assert_eq!(held + state.stock.remaining_count() + 1, SET_SIZE);
    }

    #[test]
    fn test_redeal_always_terminates() {
        for seed in 0..50 {
            let mut state = state_with(Stock::new(Some(seed)));
            deal(&mut state);
            let first = resolve_first_player(&mut state).unwrap();
            assert!(first.redeals < MAX_REDEALS);
        }
    }

    #[test]
    fn test_apply_place_removes_tile() {
        let mut state = state_with(Stock::stacked(Vec::new()));
        state.chain.append(End::Tail, tile(3, 5)).unwrap();
        give(&mut state, PlayerId::Human, &[tile(6, 5), tile(1, 1)]);

        let outcome = apply_move(
            &mut state,
            Move::Place {
                end: End::Tail,
                tile: tile(6, 5),
            },
        )
        .unwrap();

        assert_eq!(
            outcome,
            TurnOutcome::Placed {
                end: End::Tail,
                tile: tile(5, 6)
            }
        );
        if let TurnOutcome::Placed { tile: placed, .. } = outcome {
            assert_eq!(placed.faces(), [5, 6]);
        }
        assert_eq!(state.player(PlayerId::Human).hand().as_slice(), &[tile(1, 1)]);
        assert_eq!(state.chain.tail(), Some(6));
    }

    #[test]
    fn test_apply_illegal_place_keeps_state() {
        let mut state = state_with(Stock::stacked(Vec::new()));
        state.chain.append(End::Tail, tile(3, 5)).unwrap();
        give(&mut state, PlayerId::Human, &[tile(6, 5)]);

        let err = apply_move(
            &mut state,
            Move::Place {
                end: End::Head,
                tile: tile(6, 5),
            },
        )
        .unwrap_err();

        assert!(matches!(err, RoundError::IllegalMove(_)));
        assert_eq!(state.player(PlayerId::Human).hand().len(), 1);
        assert_eq!(state.chain.len(), 1);
    }

    #[test]
    fn test_apply_place_rejects_foreign_tile() {
        let mut state = state_with(Stock::stacked(Vec::new()));
        state.chain.append(End::Tail, tile(3, 5)).unwrap();
        give(&mut state, PlayerId::Human, &[tile(1, 1)]);

        let err = apply_move(
            &mut state,
            Move::Place {
                end: End::Tail,
                tile: tile(5, 5),
            },
        )
        .unwrap_err();
        assert!(matches!(err, RoundError::TileNotInHand(_)));
    }

    #[test]
    fn test_apply_pass_draws() {
        let mut state = state_with(Stock::stacked(vec![tile(0, 4)]));
        state.active = PlayerId::Computer;

        let outcome = apply_move(&mut state, Move::Pass).unwrap();
        assert_eq!(outcome, TurnOutcome::Drew { tile: tile(0, 4) });
        assert!(state.player(PlayerId::Computer).hand().contains(&tile(0, 4)));

        let outcome = apply_move(&mut state, Move::Pass).unwrap();
        assert_eq!(outcome, TurnOutcome::Passed);
        assert_eq!(state.player(PlayerId::Computer).hand().len(), 1);
    }

    #[test]
    fn test_win_on_empty_hand() {
        let mut state = state_with(Stock::new(Some(1)));
        state.chain.append(End::Tail, tile(3, 3)).unwrap();
        give(&mut state, PlayerId::Human, &[tile(1, 4)]);
        give(&mut state, PlayerId::Computer, &[tile(3, 6)]);
        state.active = PlayerId::Computer;

        assert_eq!(check_terminal(&state), RoundStatus::InProgress);

        apply_move(
            &mut state,
            Move::Place {
                end: End::Head,
                tile: tile(3, 6),
            },
        )
        .unwrap();

        assert_eq!(check_terminal(&state), RoundStatus::Won(PlayerId::Computer));
    }

    #[test]
    fn test_locked_chain_blocks() {
        let mut state = state_with(Stock::new(Some(1)));
        for _ in 0..4 {
            state.chain.append(End::Tail, tile(4, 4)).unwrap();
        }
        give(&mut state, PlayerId::Human, &[tile(4, 1)]);
        give(&mut state, PlayerId::Computer, &[tile(2, 4)]);

        assert_eq!(check_terminal(&state), RoundStatus::Blocked);
    }

    #[test]
    fn test_empty_stock_without_moves_blocks() {
        let mut state = state_with(Stock::stacked(Vec::new()));
        state.chain.append(End::Tail, tile(3, 5)).unwrap();
        give(&mut state, PlayerId::Human, &[tile(0, 0), tile(1, 2)]);
        give(&mut state, PlayerId::Computer, &[tile(6, 6)]);

        assert_eq!(check_terminal(&state), RoundStatus::Blocked);

        // One playable tile anywhere keeps the round going
        give(&mut state, PlayerId::Computer, &[tile(6, 5)]);
        assert_eq!(check_terminal(&state), RoundStatus::InProgress);

        // So does a non-empty stock
        let mut state = state_with(Stock::stacked(vec![tile(2, 6)]));
        state.chain.append(End::Tail, tile(3, 5)).unwrap();
        give(&mut state, PlayerId::Human, &[tile(0, 0)]);
        give(&mut state, PlayerId::Computer, &[tile(6, 6)]);
        assert_eq!(check_terminal(&state), RoundStatus::InProgress);
    }

    #[test]
    fn test_two_empty_stock_passes_block() {
        let mut state = state_with(Stock::stacked(Vec::new()));
        state.chain.append(End::Tail, tile(6, 6)).unwrap();
        give(&mut state, PlayerId::Human, &[tile(6, 5)]);
        give(&mut state, PlayerId::Computer, &[tile(0, 1)]);
        state.active = PlayerId::Computer;

        // The computer has nothing to play or draw
        assert_eq!(apply_move(&mut state, Move::Pass).unwrap(), TurnOutcome::Passed);
        assert_eq!(state.consecutive_passes, 1);
        assert_eq!(check_terminal(&state), RoundStatus::InProgress);

        // The human could play 6-5 but passes too
        state.switch_turn();
        assert_eq!(apply_move(&mut state, Move::Pass).unwrap(), TurnOutcome::Passed);
        assert_eq!(check_terminal(&state), RoundStatus::Blocked);
    }

    #[test]
    fn test_placement_resets_pass_count() {
        let mut state = state_with(Stock::stacked(Vec::new()));
        state.chain.append(End::Tail, tile(6, 6)).unwrap();
        give(&mut state, PlayerId::Human, &[tile(6, 5), tile(2, 2)]);
        give(&mut state, PlayerId::Computer, &[tile(5, 1)]);

        apply_move(&mut state, Move::Pass).unwrap();
        assert_eq!(state.consecutive_passes, 1);

        apply_move(
            &mut state,
            Move::Place {
                end: End::Tail,
                tile: tile(6, 5),
            },
        )
        .unwrap();
        assert_eq!(state.consecutive_passes, 0);
        assert_eq!(check_terminal(&state), RoundStatus::InProgress);
    }
}
