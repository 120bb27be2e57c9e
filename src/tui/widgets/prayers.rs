use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::prayer_times::PrayerBoard;
use crate::tui::theme;

fn block() -> Block<'static> {
    Block::default()
        .title(Span::styled(" Prayers ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::panel())
}

pub fn render(frame: &mut Frame, area: Rect, board: &PrayerBoard) {
    let mut items: Vec<ListItem> = board
        .cards
        .iter()
        .map(|card| {
            let iqama = card.iqama.as_deref().unwrap_or("--:--");
            let athan = card.athan_label.as_deref().unwrap_or("");

            let (marker, name_style, row_style) = if card.active {
                ("▸ ", theme::active(), theme::active())
            } else {
                ("  ", theme::prayer_name(), theme::panel())
            };

            let line = Line::from(vec![
                Span::styled(marker, theme::marker()),
                Span::styled(format!("{:<9}", card.prayer.display_name()), name_style),
                Span::styled(format!("{:<10}", iqama), theme::gold().add_modifier(Modifier::BOLD)),
                Span::styled(athan.to_string(), theme::dim()),
            ]);

            ListItem::new(line).style(row_style)
        })
        .collect();

    items.push(ListItem::new(Line::from("")));
    items.push(ListItem::new(Line::from(vec![
        Span::styled(format!("  {:<9}", "Sunrise"), theme::dim()),
        Span::styled(
            board.sunrise.clone().unwrap_or_else(|| "--:--".to_string()),
            theme::accent(),
        ),
    ])));

    let jummah_time = board
        .jummah
        .time
        .clone()
        .unwrap_or_else(|| "unavailable".to_string());
    let jummah_line = if board.jummah.active {
        Line::from(vec![
            Span::styled("▸ ", theme::marker()),
            Span::styled(format!("{:<9}", "Jummah"), theme::active()),
            Span::styled(jummah_time, theme::active()),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!("  {:<9}", "Jummah"), theme::dim()),
            Span::styled(jummah_time, theme::accent()),
        ])
    };
    items.push(ListItem::new(jummah_line));

    let list = List::new(items).block(block());
    frame.render_widget(list, area);
}

/// Panel body when there is no board to show.
pub fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", message), theme::accent())),
    ];
    frame.render_widget(Paragraph::new(text).block(block()), area);
}
