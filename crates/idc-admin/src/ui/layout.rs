//! Main layout orchestration.
//!
//! Renders the overall console structure:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  IDC-ADMIN v0.1.0   12 servers · fetched 14:02:11               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  SERVERS                                                        │
//! │  Server ID  Facility  Management IP  Hostname  ...              │
//! │  ...                                                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  [↑↓] Navigate   [Enter] Select   [Esc] Back   [Q] Quit         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Secondary views are drawn as overlays on top of the table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, View};

use super::{details, menu, server_table, widgets};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Main vertical layout: header, body, footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Server table
            Constraint::Length(3), // Footer (keybinds)
        ])
        .split(size);

    render_header(frame, main_chunks[0], app);
    server_table::render(frame, main_chunks[1], app);
    render_footer(frame, main_chunks[2], &app.view);

    render_overlay(frame, app);
}

/// Draw the active secondary view, if any.
fn render_overlay(frame: &mut Frame, app: &App) {
    let Some(server) = app.view_server() else {
        return;
    };

    match &app.view {
        View::ServerList => {}
        View::ServerMenu { .. } => menu::render(frame, server, app.menu_selected),
        View::ServerDetails { .. } => details::render(frame, server),
        View::ConfirmRestart { confirm, .. } => {
            widgets::render_confirm(frame, &server.server_id, *confirm)
        }
        View::Restarting { .. } => widgets::render_message(
            frame,
            "Restarting",
            &format!("Restarting server {}...", server.server_id),
            Color::Yellow,
        ),
        View::Message { title, text, .. } => {
            let accent = if text.starts_with("Error") {
                Color::Red
            } else {
                Color::Cyan
            };
            widgets::render_message(frame, title, text, accent)
        }
    }
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::styled(
            " IDC-ADMIN ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!(
                "{} servers · fetched {}",
                app.servers.len(),
                app.fetched_at.format("%H:%M:%S")
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Key hints for the active view.
fn footer_hints(view: &View) -> &'static [(&'static str, &'static str)] {
    match view {
        View::ServerList => &[
            ("[↑↓]", " Navigate  "),
            ("[Enter]", " Actions  "),
            ("[Q/Esc]", " Quit  "),
        ],
        View::ServerMenu { .. } => &[
            ("[↑↓]", " Navigate  "),
            ("[Enter]", " Select  "),
            ("[Esc]", " Back  "),
        ],
        View::ConfirmRestart { .. } => &[
            ("[←→]", " Choose  "),
            ("[Y/N]", " Answer  "),
            ("[Enter]", " Confirm  "),
            ("[Esc]", " Cancel  "),
        ],
        View::Restarting { .. } => &[("", "Waiting for the API...")],
        View::ServerDetails { .. } | View::Message { .. } => {
            &[("[Enter/Esc]", " Back  ")]
        }
    }
}

/// Render the footer with keyboard shortcuts.
fn render_footer(frame: &mut Frame, area: Rect, view: &View) {
    let keybinds: Vec<Span> = footer_hints(view)
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::default().fg(Color::Yellow)),
                Span::raw(*label),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
