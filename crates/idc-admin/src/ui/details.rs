//! Server detail panel.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::widgets::centered_rect;
use crate::domain::Server;

/// Labeled fields shown in the detail panel, missing package items as `N/A`.
pub fn detail_lines(server: &Server) -> Vec<(&'static str, String)> {
    let package = &server.package;
    vec![
        ("Server ID", server.server_id.clone()),
        ("Facility", server.facility.clone()),
        ("Management IP", server.management_ip.clone()),
        ("Public IP", server.public_ip().to_string()),
        ("Client ID", package.client_id.to_string()),
        ("Package", package.name.clone()),
        ("Hostname", package.hostname.clone()),
        ("Status", package.status.clone()),
        ("CPU", package.core.clone()),
        ("RAM", server.ram().to_string()),
        ("Storage", server.storage().to_string()),
        ("OS", server.operating_system().to_string()),
    ]
}

/// Render the detail panel for `server`.
pub fn render(frame: &mut Frame, server: &Server) {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let label_style = Style::default().fg(Color::Yellow);
    let mut text: Vec<Line> = detail_lines(server)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<15}", format!("{}:", label)), label_style),
                Span::raw(value),
            ])
        })
        .collect();

    text.push(Line::raw(""));
    text.push(Line::from(Span::styled(
        "IP Subnets",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    if server.ip_subnets.is_empty() {
        text.push(Line::from(Span::styled(
            "  none",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for subnet in &server.ip_subnets {
        text.push(Line::raw(format!(
            "  {} ({})",
            subnet.block, subnet.network_type
        )));
    }

    text.push(Line::raw(""));
    text.push(Line::from(Span::styled(
        "[Esc] Back",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" {} ", server.server_id))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Package, PackageItem};

    #[test]
    fn test_detail_lines_fall_back_to_na() {
        let server = Server {
            server_id: "abc".to_string(),
            package: Package {
                client_id: 42,
                items: vec![PackageItem {
                    category: "Operating System".to_string(),
                    option: "Debian 12".to_string(),
                }],
                ..Package::default()
            },
            ..Server::default()
        };

        let lines = detail_lines(&server);
        let get = |label: &str| {
            lines
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };

        assert_eq!(get("Server ID"), "abc");
        assert_eq!(get("Client ID"), "42");
        assert_eq!(get("OS"), "Debian 12");
        assert_eq!(get("RAM"), "N/A");
        assert_eq!(get("Storage"), "N/A");
        assert_eq!(get("Public IP"), "N/A");
    }
}
