use serde::{Deserialize, Serialize};

use crate::models::{ClockTime, PrayerRow, PrayerType};

/// Which interval counts as a prayer's "current" period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightPolicy {
    /// Athan until the following athan (Fajr until sunrise). Isha never
    /// highlights since its period runs past midnight.
    #[default]
    UntilNextAthan,
    /// Athan until iqama.
    UntilIqama,
}

/// Half-open interval `[start, end)`; a missing bound never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: Option<ClockTime>,
    pub end: Option<ClockTime>,
}

impl Window {
    pub fn contains(&self, now: ClockTime) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= now && now < end,
            _ => false,
        }
    }
}

/// The window for `prayer`, or `None` if that prayer never highlights today.
pub fn window_for(
    prayer: PrayerType,
    today: &PrayerRow,
    friday: Option<&PrayerRow>,
    policy: HighlightPolicy,
) -> Option<Window> {
    let athan = |p: PrayerType| today.athan(p);

    if prayer == PrayerType::Jummah {
        if !today.is_friday() {
            return None;
        }
        return Some(Window {
            start: friday.and_then(|f| f.jummah),
            end: athan(PrayerType::Asr),
        });
    }

    let end = match policy {
        HighlightPolicy::UntilIqama => today.iqama(prayer),
        HighlightPolicy::UntilNextAthan => match prayer {
            PrayerType::Fajr => today.sunrise,
            PrayerType::Dhuhr => athan(PrayerType::Asr),
            PrayerType::Asr => athan(PrayerType::Maghrib),
            PrayerType::Maghrib => athan(PrayerType::Isha),
            PrayerType::Isha | PrayerType::Jummah => return None,
        },
    };

    Some(Window {
        start: athan(prayer),
        end,
    })
}

/// Every prayer whose window contains `now`, in board order. Windows are
/// evaluated independently, so overlapping data can activate more than one.
pub fn active_prayers(
    today: &PrayerRow,
    friday: Option<&PrayerRow>,
    now: ClockTime,
    policy: HighlightPolicy,
) -> Vec<PrayerType> {
    PrayerType::all()
        .into_iter()
        .filter(|p| {
            window_for(*p, today, friday, policy).is_some_and(|w| w.contains(now))
        })
        .collect()
}
