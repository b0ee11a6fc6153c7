use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::value_objects::{GameSettings, DEFAULT_MAX_VISIBLE};
use crate::infrastructure::bot::strategies::StrategyType;

/// Command line configuration; every flag falls back to an environment
/// variable (a `.env` file is loaded first)
#[derive(Parser, Debug, Clone)]
#[command(name = "dominoes", about = "Play dominoes against the computer")]
pub struct AppConfig {
    /// Name shown for the human player
    #[arg(long, env = "DOMINOES_PLAYER_NAME", default_value = "Player")]
    pub name: String,

    /// Name shown for the computer player
    #[arg(long, env = "DOMINOES_COMPUTER_NAME", default_value = "Computer")]
    pub computer_name: String,

    /// Seed for the stock shuffle (and the random strategy)
    #[arg(long, env = "DOMINOES_SEED")]
    pub seed: Option<u64>,

    /// Computer strategy
    #[arg(long, env = "DOMINOES_STRATEGY", value_enum, default_value = "frequency")]
    pub strategy: StrategyType,

    /// Chain tiles shown before the view is elided
    #[arg(long, env = "DOMINOES_MAX_VISIBLE", default_value_t = DEFAULT_MAX_VISIBLE)]
    pub max_visible: usize,

    /// Do not wait for Enter before computer moves
    #[arg(long, env = "DOMINOES_NO_PAUSE", default_value_t = false)]
    pub no_pause: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "DOMINOES_LOG", default_value = "dominoes=warn")]
    pub log: String,
}

impl AppConfig {
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            player_name: self.name.clone(),
            computer_name: self.computer_name.clone(),
            max_visible: self.max_visible,
            pause_for_computer: !self.no_pause,
            seed: self.seed,
        }
    }

    /// Seed for the computer strategy, kept apart from the stock's stream
    pub fn strategy_seed(&self) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(1))
    }
}

/// Initialize tracing. Logs go to stderr so they never mix with the board.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
