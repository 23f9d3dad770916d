//! Duel solver binary.
//!
//! Composition root that assembles the pieces end to end: configuration
//! from the environment, the boss statistics from a text description, the
//! search controller for both difficulty modes, and the two resulting
//! minima on stdout (normal mode first). Everything else — lifecycle and
//! search statistics — goes to stderr through `tracing`.

mod config;
mod input;

use anyhow::{Context, Result};
use config::ClientConfig;
use game_core::{GameState, Mode, Player};
use solver::Solver;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    setup_logging();

    tracing::info!("Starting duel solver");
    tracing::info!("Input: {}", config.input.display());

    let text = std::fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read {}", config.input.display()))?;
    let boss = input::parse_boss(&text)?;
    tracing::info!(%boss, "parsed opponent");

    let solver = Solver::new(config.schedule);
    for mode in [Mode::Normal, Mode::Hard] {
        let opening = GameState::opening(Player::standard(mode), boss);
        let report = solver
            .minimal_mana_to_win(&opening)
            .with_context(|| format!("search failed in {mode} mode"))?;

        tracing::info!(
            %mode,
            mana_spent = report.mana_spent,
            passes = report.passes,
            depth_limit = report.depth_limit,
            wins = report.final_pass.wins,
            losses = report.final_pass.losses,
            "search complete"
        );
        println!("{}", report.mana_spent);
    }

    Ok(())
}

/// Setup logging to stderr, leaving stdout to the two result integers.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
