use chrono::NaiveDateTime;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    last_refresh: Option<NaiveDateTime>,
    error: Option<&str>,
) {
    let hints = [("[r]", " refresh  "), ("[?]", " help  "), ("[Esc]", " quit")];

    let mut spans = Vec::new();
    for (key, label) in &hints {
        spans.push(Span::styled(*key, theme::gold()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    match (error, last_refresh) {
        (Some(err), _) => {
            spans.push(Span::styled("   ✗ ", theme::error()));
            spans.push(Span::styled(err, theme::error()));
        }
        (None, Some(at)) => {
            spans.push(Span::styled(
                format!("   updated {}", at.format("%H:%M")),
                theme::dim(),
            ));
        }
        (None, None) => {}
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
