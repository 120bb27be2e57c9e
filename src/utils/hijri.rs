use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

use crate::models::ClockTime;

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "Unknown"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HijriInfo {
    pub day: usize,
    pub month: usize,
    pub year: usize,
}

impl HijriInfo {
    pub fn formatted(&self) -> String {
        format!("{} {}, {} AH", self.month_name(), self.day, self.year)
    }

    pub fn month_name(&self) -> &'static str {
        hijri_month_name(self.month)
    }
}

/// The Gregorian date whose Hijri equivalent is shown. The Islamic day
/// starts at Maghrib, so from Maghrib onwards this is tomorrow. Without a
/// Maghrib time no rollover is applied.
pub fn conversion_date(today: NaiveDate, maghrib: Option<ClockTime>, now: ClockTime) -> NaiveDate {
    match maghrib {
        Some(maghrib) if now >= maghrib => today.succ_opt().unwrap_or(today),
        _ => today,
    }
}

pub fn to_hijri(date: NaiveDate) -> Result<HijriInfo> {
    let hd = HijriDate::from_gr(
        date.year() as usize,
        date.month() as usize,
        date.day() as usize,
    )
    .map_err(|e| anyhow::anyhow!("Hijri conversion error: {}", e))?;

    Ok(HijriInfo {
        day: hd.day(),
        month: hd.month(),
        year: hd.year(),
    })
}

/// "Sat, Ramadan 8, 1446 AH" for `date` shifted by `offset_days`.
/// `offset_days` adjusts for local moon sighting (e.g. -1 if your country
/// is one day behind Saudi Arabia). `None` when the date is outside the
/// convertible range.
pub fn hijri_label(date: NaiveDate, offset_days: i32) -> Option<String> {
    let Some(adjusted) = date.checked_add_signed(Duration::days(i64::from(offset_days))) else {
        log::warn!("Hijri offset {} moves {} out of range", offset_days, date);
        return None;
    };
    match to_hijri(adjusted) {
        Ok(info) => Some(format!("{}, {}", adjusted.format("%a"), info.formatted())),
        Err(e) => {
            log::warn!("No Hijri date for {}: {}", adjusted, e);
            None
        }
    }
}
