use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;
use std::path::Path;

use crate::config::AppConfig;
use crate::prayer_times::{Board, PrayerBoard, PrayerTimeEngine};
use crate::timetable::TimeTable;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

pub fn load_table(config: &AppConfig) -> Result<TimeTable> {
    let path = &config.table.path;
    TimeTable::load(path, &config.table.format)
        .with_context(|| format!("Loading timetable {:?}", path))
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(config: &AppConfig, now: NaiveDateTime, json: bool) -> Result<()> {
    let table = load_table(config)?;
    let engine = PrayerTimeEngine::new(&config.display, config.table.format.time_format);
    let board = engine.compute(&table, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    println!();
    match &board {
        Board::NoData { gregorian, .. } => {
            println_colored!(GOLD, "  {} — {}", config.display.title, gregorian);
            println!();
            println_colored!(AMBER, "  No data for today");
        }
        Board::Ready(board) => print_board(&config.display.title, board),
    }
    println!();
    Ok(())
}

fn print_board(title: &str, board: &PrayerBoard) {
    println_colored!(GOLD, "  {} — {}", title, board.gregorian);
    if let Some(hijri) = &board.hijri {
        println_colored!(DIM, "  {}", hijri);
    }
    println!();

    for card in &board.cards {
        let iqama = card.iqama.as_deref().unwrap_or("--:--");
        let athan = card.athan_label.as_deref().unwrap_or("");
        if card.active {
            println_colored!(GREEN, "▸ {:<10}  {:<9} {}", card.prayer.display_name(), iqama, athan);
        } else {
            println_colored!(BOLD, "  {:<10}  {:<9} {}", card.prayer.display_name(), iqama, athan);
        }
    }

    println!();
    println_colored!(DIM, "  {:<10}  {}", "Sunrise", board.sunrise.as_deref().unwrap_or("--:--"));
    let jummah = board.jummah.time.as_deref().unwrap_or("unavailable");
    if board.jummah.active {
        println_colored!(GREEN, "▸ {:<10}  {}", "Jummah", jummah);
    } else {
        println_colored!(DIM, "  {:<10}  {}", "Jummah", jummah);
    }

    println!();
    println_colored!(AMBER, "  {}", board.next_label);
}

// ─── Row ─────────────────────────────────────────────────────────────────────

pub fn handle_row(config: &AppConfig, date: Option<&str>, now: NaiveDateTime) -> Result<()> {
    let format = &config.table.format;
    let date = match date {
        Some(raw) => format.date_format.parse(raw).ok_or_else(|| {
            anyhow!(
                "Bad date '{}'; expected {}",
                raw,
                format.date_format.pattern()
            )
        })?,
        None => now.date(),
    };

    let table = load_table(config)?;
    let Some(row) = table.find_row(date) else {
        let covered = match table.date_range() {
            Some((first, last)) => format!(
                "table covers {} to {}",
                format.date_format.format(first),
                format.date_format.format(last)
            ),
            None => "table is empty".to_string(),
        };
        return Err(anyhow!(
            "No timetable row for {} ({})",
            format.date_format.format(date),
            covered
        ));
    };

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(row.to_record(table.format()))?;
    writer.flush()?;
    Ok(())
}

// ─── Init ────────────────────────────────────────────────────────────────────

pub fn handle_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => AppConfig::config_path()?,
    };
    if path.exists() && !force {
        println!("Config already exists at {}. Use --force to overwrite.", path.display());
        return Ok(());
    }
    AppConfig::default().save(&path)?;
    println_colored!(GREEN, "  ✓ Wrote {}", path.display());
    Ok(())
}
