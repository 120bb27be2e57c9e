pub mod clock;
pub mod prayer;

pub use clock::{has_padded_hour, ClockTime, TimeFormat};
pub use prayer::{PrayerRow, PrayerSlot, PrayerType};
