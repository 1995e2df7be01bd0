//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use ffl_compare::{
    cli::{Commands, FflCompare},
    commands::{
        compare::handle_compare, lookup::handle_lookup, player_card::handle_player_card,
        CommandContext,
    },
    config::{load_dotenv, ProviderConfig},
};
use tracing::debug;

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ffl_compare=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(app: FflCompare) -> anyhow::Result<()> {
    let loaded = load_dotenv()?;
    debug!(?loaded, "environment files");

    let mut config = ProviderConfig::from_env().context("loading provider configuration")?;
    if let Some(season) = app.season {
        config.season = season;
    }
    let ctx = CommandContext::new(config)?;

    match app.command {
        Commands::Compare {
            player_a,
            player_b,
            week,
            json,
        } => handle_compare(&ctx, &player_a, &player_b, week, json).await?,

        Commands::Lookup { name, json } => handle_lookup(&ctx, &name, json).await?,

        Commands::PlayerCard { name, week, json } => {
            handle_player_card(&ctx, &name, week, json).await?
        }
    }

    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() {
    init_tracing();
    let app = FflCompare::parse();

    if let Err(err) = run(app).await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
