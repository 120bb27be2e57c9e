mod cli;
mod config;
mod models;
mod prayer_times;
mod timetable;
mod tui;
mod utils;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Init must work even when the existing config no longer parses
    if let Some(Commands::Init { force }) = cli.command {
        return handlers::handle_init(cli.config.as_deref(), force);
    }

    let mut config = AppConfig::load(cli.config.as_deref()).context("Loading config")?;
    if let Some(table) = cli.table {
        config.table.path = table;
    }
    let now = cli.at.unwrap_or_else(|| Local::now().naive_local());

    match cli.command {
        Some(Commands::Times { json }) => {
            handlers::handle_times(&config, now, json)?;
        }
        Some(Commands::Row { date }) => {
            handlers::handle_row(&config, date.as_deref(), now)?;
        }
        Some(Commands::Init { .. }) => unreachable!(),

        // No subcommand → launch TUI
        None => {
            tui::app::run(config, cli.at)?;
        }
    }

    Ok(())
}
