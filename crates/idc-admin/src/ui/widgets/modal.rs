//! Modal dialogs drawn over the server table.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a centered text box with an OK hint.
pub fn render_message(frame: &mut Frame, title: &str, text: &str, accent: Color) {
    let popup_area = centered_rect(60, 40, frame.area());
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![Line::raw("")];
    lines.extend(text.lines().map(|l| Line::raw(l.to_string())));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "[Enter] OK",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .centered()
        .block(modal_block(title, accent));

    frame.render_widget(paragraph, popup_area);
}

/// Render the yes/no restart prompt. `confirm` highlights "Yes".
pub fn render_confirm(frame: &mut Frame, server_id: &str, confirm: bool) {
    let popup_area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, popup_area);

    let selected = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let idle = Style::default().fg(Color::Yellow);
    let (yes_style, no_style) = if confirm {
        (selected, idle)
    } else {
        (idle, selected)
    };

    let text = vec![
        Line::raw(""),
        Line::raw(format!("Are you sure you want to restart server {}?", server_id)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Yes  ", yes_style),
            Span::raw("     "),
            Span::styled("  No  ", no_style),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .centered()
        .block(modal_block("Confirm Restart", Color::Yellow));

    frame.render_widget(paragraph, popup_area);
}

fn modal_block(title: &str, accent: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
}

/// Create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 15);
    }
}
