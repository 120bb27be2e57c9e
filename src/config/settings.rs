use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::prayer_times::HighlightPolicy;
use crate::timetable::TableFormat;

fn default_table_path() -> PathBuf {
    PathBuf::from("prayer_times.csv")
}
fn default_title() -> String {
    "Prayer Times".to_string()
}
fn default_hijri_offset() -> i32 {
    0
}
fn default_refresh_secs() -> u64 {
    60
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Relative paths resolve against the working directory.
    #[serde(default = "default_table_path")]
    pub path: PathBuf,
    #[serde(flatten)]
    pub format: TableFormat,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            path: default_table_path(),
            format: TableFormat::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub highlight: HighlightPolicy,
    /// Days to add/subtract from Hijri date for local moon sighting.
    /// 0 = default (Saudi), -1 = one day behind, +1 = one day ahead
    #[serde(default = "default_hijri_offset")]
    pub hijri_offset: i32,
    /// Seconds between timetable reloads on the dashboard.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            highlight: HighlightPolicy::default(),
            hijri_offset: default_hijri_offset(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "iqama").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };
        if !path.exists() {
            log::debug!("No config at {:?}; using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Parsing {:?}", path))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeFormat;
    use crate::timetable::{DateFormat, Layout};

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(&dir.path().join("config.toml"))).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.display.refresh_secs, 60);
        assert_eq!(config.table.format.skip_rows, 2);
        assert_eq!(config.display.highlight, HighlightPolicy::UntilNextAthan);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[table]
path = "/srv/masjid/times.csv"
layout = "headed"
date_format = "iso"
time_format = "12h"

[display]
highlight = "until-iqama"
hijri_offset = -1
"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.table.path, PathBuf::from("/srv/masjid/times.csv"));
        assert_eq!(config.table.format.layout, Layout::Headed);
        assert_eq!(config.table.format.date_format, DateFormat::Iso);
        assert_eq!(config.table.format.time_format, TimeFormat::TwelveHour);
        assert_eq!(config.table.format.skip_rows, 2);
        assert_eq!(config.display.highlight, HighlightPolicy::UntilIqama);
        assert_eq!(config.display.hijri_offset, -1);
        assert_eq!(config.display.title, "Prayer Times");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.display.title = "Masjid Istiqlal".to_string();
        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn rejects_unknown_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nhighlight = \"forever\"\n").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }
}
