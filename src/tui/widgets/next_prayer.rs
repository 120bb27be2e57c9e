use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::prayer_times::NextEvent;
use crate::tui::theme;
use crate::utils::format::format_countdown;

pub fn render(frame: &mut Frame, area: Rect, next: Option<&NextEvent>) {
    let block = Block::default()
        .title(Span::styled(" Next Prayer ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::panel());

    let content: Vec<Line> = match next {
        None => vec![
            Line::from(""),
            Line::from(Span::styled("  No data", theme::dim())),
        ],
        Some(NextEvent::Upcoming { prayer, minutes }) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", prayer.display_name().to_uppercase()),
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  in  ", theme::dim()),
                Span::styled(
                    format_countdown(*minutes),
                    theme::accent().add_modifier(Modifier::BOLD),
                ),
            ]),
        ],
        Some(NextEvent::FajrTomorrow) => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  FAJR",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("  tomorrow", theme::dim())),
        ],
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
