use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iqama", version, author, about = "Live prayer-times board for a mosque timetable")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Timetable CSV, overriding the configured path
    #[arg(long, global = true)]
    pub table: Option<PathBuf>,

    /// Pretend the local time is this instant (YYYY-MM-DDTHH:MM)
    #[arg(long, global = true, value_parser = parse_local_datetime)]
    pub at: Option<NaiveDateTime>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's board once and exit
    Times {
        /// Print the board as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the timetable row for a date as CSV
    Row {
        /// Date in the timetable's date format; defaults to today
        date: Option<String>,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn parse_local_datetime(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["iqama", "times", "--json", "--at", "2025-03-07T13:20"]);
        assert_eq!(
            cli.at.unwrap().format("%Y-%m-%d %H:%M").to_string(),
            "2025-03-07 13:20"
        );
        assert!(matches!(cli.command, Some(Commands::Times { json: true })));
    }

    #[test]
    fn rejects_bad_instant() {
        assert!(Cli::try_parse_from(["iqama", "--at", "tomorrow"]).is_err());
    }
}
