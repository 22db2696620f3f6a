//! Main entry point for the `polyglot` command.

use anyhow::Context;
use clap::Parser;
use polyglot_cli::{App, Cli};
use polyglot_common::init_logging;
use polyglot_config::{Config, ConfigLoader};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli).await?;

    let mut logging = config.logging.to_logging_config();
    if let Some(level) = &cli.log_level {
        logging.level.clone_from(level);
    }
    init_logging(&logging).context("failed to initialize logging")?;

    let app = match App::from_cli(&cli, &config).await {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to prepare translator: {}", e);
            return Err(e.into());
        }
    };

    println!("{}", app.execute(&cli.command));
    Ok(())
}

async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => ConfigLoader::new(path)
            .load()
            .await
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(Config::default()),
    }
}
