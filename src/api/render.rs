//! Console rendering of a round

use crate::domain::entities::{PlayerId, RoundState, RoundStatus};
use crate::domain::value_objects::Chain;

const SEPARATOR: &str =
    "======================================================================";

/// Chain view, elided past `max_visible` tiles
pub fn render_chain(chain: &Chain, max_visible: usize) -> String {
    chain
        .render(max_visible)
        .iter()
        .map(|token| token.to_string())
        .collect()
}

/// Status line for the round
pub fn status_line(state: &RoundState) -> String {
    match state.status {
        RoundStatus::InProgress => {
            let player = state.active_player();
            match player.id() {
                PlayerId::Human => format!("{}'s turn. Enter your command.", player.name()),
                PlayerId::Computer => {
                    format!("{}'s turn. Press Enter to continue...", player.name())
                }
            }
        }
        RoundStatus::Won(winner) => format!("{} won", state.player(winner).name()),
        RoundStatus::Blocked => "Draw".to_string(),
    }
}

/// Full board as seen by the human player: stock size, opponent tile count,
/// chain, own hand numbered from 1, and the status line
pub fn render_round(state: &RoundState, max_visible: usize) -> String {
    let computer = state.player(PlayerId::Computer);
    let human = state.player(PlayerId::Human);

    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&format!("Stock size: {}\n", state.stock.remaining_count()));
    out.push_str(&format!("{} pieces: {}\n\n", computer.name(), computer.hand().len()));
    out.push_str(&render_chain(&state.chain, max_visible));
    out.push_str("\n\n");
    out.push_str("Your pieces:\n");
    for (i, tile) in human.hand().iter().enumerate() {
        out.push_str(&format!("{}:{}\n", i + 1, tile));
    }
    out.push('\n');
    out.push_str(&format!("Status: {}\n", status_line(state)));
    out
}
