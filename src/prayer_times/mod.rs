pub mod engine;
pub mod next_event;
pub mod window;

pub use engine::{Board, PrayerBoard, PrayerTimeEngine};
pub use next_event::NextEvent;
pub use window::HighlightPolicy;
