//! Per-server action menu.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use super::widgets::centered_rect;
use crate::domain::{MenuItem, Server};

/// Render the action menu for `server` with `selected` highlighted.
pub fn render(frame: &mut Frame, server: &Server, selected: usize) {
    let area = centered_rect(40, 40, frame.area());
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .map(|item| {
            // Dim the entries that have no API behind them.
            let style = match item {
                MenuItem::PowerOffServer | MenuItem::PowerOnServer => {
                    Style::default().fg(Color::DarkGray)
                }
                _ => Style::default(),
            };
            ListItem::new(Line::from(Span::styled(item.label(), style)))
        })
        .collect();

    let title = if server.package.hostname.is_empty() {
        format!(" {} ", server.server_id)
    } else {
        format!(" {} · {} ", server.server_id, server.package.hostname)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
