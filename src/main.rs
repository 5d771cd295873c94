mod catalog;
mod cli;
mod config;
mod error;
mod models;
mod theme;

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use catalog::Catalog;
use cli::{CliConfig, Shell, VERSION};
use config::Settings;
use theme::Theme;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter())),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let settings = Settings::resolve(&cli).context("failed to load configuration")?;
    tracing::debug!(version = VERSION, ?settings, "starting");

    let catalog = match settings.seed {
        Some(seed) => Catalog::with_seed(seed),
        None => Catalog::new(),
    };

    let stdout = io::stdout();
    let theme = Theme::new(settings.color && stdout.is_terminal());
    let mut shell = Shell::new(
        catalog,
        io::stdin().lock(),
        stdout.lock(),
        theme,
        settings.suggestion_limit,
    );
    shell.run().context("menu loop failed")?;

    Ok(())
}
