use ratatui::style::{Color, Modifier, Style};

// Night-board palette
pub const BG: Color = Color::Rgb(14, 17, 22);
pub const PANEL: Color = Color::Rgb(22, 27, 34);
pub const BORDER: Color = Color::Rgb(48, 56, 66);
pub const TEXT: Color = Color::Rgb(226, 222, 210);
pub const MUTED: Color = Color::Rgb(120, 128, 138);
pub const GOLD: Color = Color::Rgb(200, 164, 72);
pub const MINT: Color = Color::Rgb(96, 170, 128);
pub const ACTIVE_BG: Color = Color::Rgb(30, 54, 42);
pub const AMBER: Color = Color::Rgb(214, 142, 62);
pub const ERROR: Color = Color::Rgb(196, 86, 70);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn panel() -> Style {
    Style::default().fg(TEXT).bg(PANEL)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Labels and secondary text.
pub fn dim() -> Style {
    Style::default().fg(MUTED)
}

/// Titles and times.
pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

/// Hijri date, countdown and notices.
pub fn accent() -> Style {
    Style::default().fg(AMBER)
}

pub fn prayer_name() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn clock() -> Style {
    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
}

pub fn marker() -> Style {
    Style::default().fg(MINT)
}

/// The card of the prayer currently in its window.
pub fn active() -> Style {
    Style::default()
        .fg(MINT)
        .bg(ACTIVE_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(ERROR)
}
