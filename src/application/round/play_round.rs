use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::api::render::render_round;
use crate::domain::entities::{Player, PlayerId, RoundState, RoundStatus};
use crate::domain::input::MoveInput;
use crate::domain::services::{
    apply_move, check_terminal, deal, resolve_first_player, FirstPlay, RoundError,
};
use crate::domain::value_objects::{GameSettings, Stock, TurnOutcome};
use crate::infrastructure::bot::strategies::MoveSelector;

/// Turns after which a round is treated as runaway
pub const MAX_TURNS: u32 = 1_000;

/// Set up a fresh round from settings
pub fn new_round(settings: &GameSettings, strategy: Box<dyn MoveSelector>) -> RoundState {
    RoundState::new(
        Player::human(settings.player_name.clone()),
        Player::computer(
            settings.computer_name.clone(),
            strategy,
            settings.pause_for_computer,
        ),
        Stock::new(settings.seed),
    )
}

/// How a round ended
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub status: RoundStatus,
    pub first_play: FirstPlay,
    pub turns: u32,
    pub winner_name: Option<String>,
}

/// Play round use case
pub struct PlayRound<W> {
    settings: GameSettings,
    input: Box<dyn MoveInput>,
    output: W,
}

impl<W: AsyncWrite + Unpin + Send> PlayRound<W> {
    pub fn new(settings: GameSettings, input: Box<dyn MoveInput>, output: W) -> Self {
        Self {
            settings,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Deal, seed the chain, then alternate turns until the round is won or
    /// blocked
    pub async fn execute(&mut self, state: &mut RoundState) -> Result<RoundOutcome, RoundError> {
        deal(state);
        let first_play = resolve_first_player(state)?;
        tracing::info!(
            "{} opens with {} after {} re-deals",
            state.player(first_play.player).name(),
            first_play.tile,
            first_play.redeals
        );

        self.render(state).await?;

        loop {
            if state.turn_count >= MAX_TURNS {
                return Err(RoundError::TurnLimit(MAX_TURNS));
            }

            let outcome = self.take_turn(state).await?;
            state.turn_count += 1;
            tracing::debug!(
                player = state.active.as_str(),
                outcome = ?outcome,
                stock = state.stock.remaining_count(),
                "Turn resolved"
            );

            state.status = check_terminal(state);
            if state.status.is_terminal() {
                break;
            }

            state.switch_turn();
            self.render(state).await?;
        }

        self.render(state).await?;

        let winner_name = match state.status {
            RoundStatus::Won(winner) => Some(state.player(winner).name().to_string()),
            _ => None,
        };
        match state.snapshot().to_json() {
            Ok(snapshot) => tracing::info!(
                status = state.status.as_str(),
                "Round finished after {} turns: {}",
                state.turn_count,
                snapshot
            ),
            Err(e) => tracing::warn!("Failed to serialize round snapshot: {}", e),
        }

        Ok(RoundOutcome {
            status: state.status,
            first_play,
            turns: state.turn_count,
            winner_name,
        })
    }

    /// Ask the active player for moves until one is applied. Only a human
    /// gets another try after an illegal placement.
    async fn take_turn(&mut self, state: &mut RoundState) -> Result<TurnOutcome, RoundError> {
        let mover = state.active;

        loop {
            let mv = {
                let RoundState { players, chain, .. } = &mut *state;
                players[mover.index()]
                    .select_move(chain, self.input.as_mut())
                    .await?
            };

            match apply_move(state, mv) {
                Ok(outcome) => return Ok(outcome),
                Err(RoundError::IllegalMove(e)) if mover == PlayerId::Human => {
                    tracing::warn!("Illegal move from {}: {}", state.player(mover).name(), e);
                    self.input.reject_move(&e).await?;
                }
                Err(RoundError::IllegalMove(e)) => {
                    tracing::error!("Computer strategy broke the chain rules: {}", e);
                    return Err(RoundError::InconsistentMove(e));
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn render(&mut self, state: &RoundState) -> Result<(), RoundError> {
        let board = render_round(state, self.settings.max_visible);
        self.output.write_all(board.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
