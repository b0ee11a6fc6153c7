use clap::Parser;

use dominoes::api::console;
use dominoes::application::round::{new_round, PlayRound};
use dominoes::infrastructure::app_config::{init_tracing, AppConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::parse();
    init_tracing(&config.log);

    let settings = config.settings();
    settings.validate().map_err(anyhow::Error::msg)?;

    let strategy = config.strategy.build(config.strategy_seed());
    tracing::info!(
        "Starting round: {} vs {} ({} strategy)",
        settings.player_name,
        settings.computer_name,
        strategy.name()
    );

    let mut state = new_round(&settings, strategy);
    let mut round = PlayRound::new(settings, Box::new(console::stdio()), tokio::io::stdout());
    let outcome = round.execute(&mut state).await?;

    tracing::info!(
        "Round over after {} turns, winner: {}",
        outcome.turns,
        outcome.winner_name.as_deref().unwrap_or("none")
    );

    Ok(())
}
