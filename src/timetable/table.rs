use chrono::NaiveDate;
use csv::StringRecord;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::format::ColumnMap;
use super::{Layout, TableFormat};
use crate::models::{has_padded_hour, ClockTime, PrayerRow, PrayerSlot};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("unable to read timetable {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed timetable: {0}")]
    Csv(#[from] csv::Error),
    #[error("timetable header has no '{0}' column")]
    MissingColumn(&'static str),
}

/// Parsed rows of one timetable export, in file order.
#[derive(Debug, Clone, Default)]
pub struct TimeTable {
    rows: Vec<PrayerRow>,
    /// The format the rows were read with, `pad_hours` reflecting the file.
    format: TableFormat,
}

impl TimeTable {
    pub fn load(path: &Path, format: &TableFormat) -> Result<Self, TableError> {
        let file = File::open(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(file, format)?;
        if table.is_empty() {
            log::warn!("Timetable {} has no data rows", path.display());
        }
        log::info!("Loaded {} timetable rows from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn parse<R: Read>(reader: R, format: &TableFormat) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = reader.records();

        let columns = match format.layout {
            Layout::Positional => {
                for skipped in records.by_ref().take(format.skip_rows) {
                    skipped?;
                }
                ColumnMap::positional()
            }
            Layout::Headed => {
                let Some(header) = records.next().transpose()? else {
                    return Ok(Self {
                        rows: Vec::new(),
                        format: format.clone(),
                    });
                };
                ColumnMap::from_headers(header.iter()).map_err(TableError::MissingColumn)?
            }
        };

        let mut rows = Vec::new();
        let mut seen = HashSet::new();
        let mut padded = format.pad_hours;
        for record in records {
            let record = record?;
            let Some(row) = build_row(&record, &columns, format) else {
                continue;
            };
            if !padded {
                padded = columns
                    .time_columns()
                    .any(|i| record.get(i).is_some_and(has_padded_hour));
            }
            if !seen.insert(row.date) {
                log::warn!("Duplicate timetable row for {}; keeping the first", row.date);
                continue;
            }
            rows.push(row);
        }

        if padded && !format.pad_hours {
            log::debug!("Timetable uses zero-padded hours");
        }
        Ok(Self {
            rows,
            format: TableFormat {
                pad_hours: padded,
                ..format.clone()
            },
        })
    }

    pub fn rows(&self) -> &[PrayerRow] {
        &self.rows
    }

    /// Format for writing rows back out the way the file wrote them.
    pub fn format(&self) -> &TableFormat {
        &self.format
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row whose date equals `date`. `None` is the ordinary "no data" outcome.
    pub fn find_row(&self, date: NaiveDate) -> Option<&PrayerRow> {
        self.rows.iter().find(|r| r.date == date)
    }

    /// First Friday in table order, whether or not it has already passed.
    pub fn find_next_friday(&self) -> Option<&PrayerRow> {
        self.rows.iter().find(|r| r.is_friday())
    }

    /// First Friday in table order dated on or after `date`.
    pub fn friday_on_or_after(&self, date: NaiveDate) -> Option<&PrayerRow> {
        self.rows.iter().find(|r| r.is_friday() && r.date >= date)
    }

    /// Earliest and latest dates covered.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.rows().iter().map(|r| r.date).min()?;
        let last = self.rows().iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}

fn build_row(record: &StringRecord, columns: &ColumnMap, format: &TableFormat) -> Option<PrayerRow> {
    let cell = |idx: usize| record.get(idx).unwrap_or("");
    let time = |idx: Option<usize>| -> Option<ClockTime> {
        idx.and_then(|i| format.time_format.parse(cell(i)))
    };

    let raw_date = cell(columns.date);
    if raw_date.is_empty() {
        return None;
    }
    let Some(date) = format.date_format.parse(raw_date) else {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        log::warn!("Skipping timetable line {}: unparseable date '{}'", line, raw_date);
        return None;
    };

    Some(PrayerRow {
        date,
        day_name: cell(columns.day).to_string(),
        fajr: PrayerSlot {
            athan: time(columns.fajr_athan),
            iqama: time(columns.fajr_iqama),
        },
        sunrise: time(columns.sunrise),
        dhuhr: PrayerSlot {
            athan: time(columns.dhuhr_athan),
            iqama: time(columns.dhuhr_iqama),
        },
        jummah: time(columns.jummah),
        asr: PrayerSlot {
            athan: time(columns.asr_athan),
            iqama: time(columns.asr_iqama),
        },
        maghrib: PrayerSlot {
            athan: time(columns.maghrib_athan),
            iqama: time(columns.maghrib_iqama),
        },
        isha: PrayerSlot {
            athan: time(columns.isha_athan),
            iqama: time(columns.isha_iqama),
        },
    })
}
