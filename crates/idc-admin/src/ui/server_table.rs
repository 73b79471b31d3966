//! Server table.
//!
//! The column titles are the table header, which is never selectable; row
//! selection indexes servers only.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::domain::{App, Server, TableLayout};

const FULL_HEADERS: [&str; 9] = [
    "Server ID",
    "Facility",
    "Management IP",
    "Hostname",
    "Status",
    "CPU",
    "RAM",
    "Storage",
    "OS",
];

const COMPACT_HEADERS: [&str; 3] = ["Server ID", "Name", "Public IP"];

/// Column titles for a layout.
pub fn headers(layout: TableLayout) -> &'static [&'static str] {
    match layout {
        TableLayout::Full => &FULL_HEADERS,
        TableLayout::Compact => &COMPACT_HEADERS,
    }
}

/// Cell texts of one server, in header order.
pub fn row_cells(server: &Server, layout: TableLayout) -> Vec<String> {
    match layout {
        TableLayout::Full => vec![
            server.server_id.clone(),
            server.facility.clone(),
            server.management_ip.clone(),
            server.package.hostname.clone(),
            server.package.status.clone(),
            server.package.core.clone(),
            server.ram().to_string(),
            server.storage().to_string(),
            server.operating_system().to_string(),
        ],
        TableLayout::Compact => vec![
            server.server_id.clone(),
            server.package.name.clone(),
            server.public_ip().to_string(),
        ],
    }
}

fn widths(layout: TableLayout) -> Vec<Constraint> {
    match layout {
        TableLayout::Full => vec![
            Constraint::Length(12), // ID
            Constraint::Length(9),  // Facility
            Constraint::Length(16), // Management IP
            Constraint::Fill(2),    // Hostname
            Constraint::Length(10), // Status
            Constraint::Fill(2),    // CPU
            Constraint::Length(8),  // RAM
            Constraint::Fill(2),    // Storage
            Constraint::Fill(2),    // OS
        ],
        TableLayout::Compact => vec![
            Constraint::Length(14),
            Constraint::Fill(1),
            Constraint::Length(20),
        ],
    }
}

/// Render the server table into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" SERVERS ({}) ", app.servers.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.servers.is_empty() {
        let empty = Paragraph::new("No servers returned by the API.")
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        headers(app.layout)
            .iter()
            .map(|h| Cell::from(*h))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .height(1);

    let rows: Vec<Row> = app
        .servers
        .iter()
        .map(|server| Row::new(row_cells(server, app.layout)))
        .collect();

    let table = Table::new(rows, widths(app.layout))
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IpSubnet, Package, PackageItem};

    fn sample() -> Server {
        Server {
            server_id: "abc".to_string(),
            facility: "DAL1".to_string(),
            management_ip: "10.0.0.1".to_string(),
            ip_subnets: vec![IpSubnet {
                block: "203.0.113.8/29".to_string(),
                network_type: "public".to_string(),
            }],
            package: Package {
                hostname: "h1".to_string(),
                status: "active".to_string(),
                core: "4-core".to_string(),
                name: "E3-1230".to_string(),
                items: vec![PackageItem {
                    category: "RAM".to_string(),
                    option: "16GB".to_string(),
                }],
                ..Package::default()
            },
        }
    }

    #[test]
    fn test_full_row() {
        let cells = row_cells(&sample(), TableLayout::Full);
        assert_eq!(cells.len(), headers(TableLayout::Full).len());
        assert_eq!(
            cells,
            ["abc", "DAL1", "10.0.0.1", "h1", "active", "4-core", "16GB", "N/A", "N/A"]
        );
    }

    #[test]
    fn test_compact_row() {
        let cells = row_cells(&sample(), TableLayout::Compact);
        assert_eq!(cells.len(), headers(TableLayout::Compact).len());
        assert_eq!(cells, ["abc", "E3-1230", "203.0.113.8/29"]);
    }
}
