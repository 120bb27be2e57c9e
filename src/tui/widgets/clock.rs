use chrono::NaiveTime;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;
use crate::utils::format::format_clock;

pub fn render(frame: &mut Frame, area: Rect, now: NaiveTime) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format_clock(now), theme::clock())),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
