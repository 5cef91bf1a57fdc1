//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered action button with its keyboard shortcut dimmed after
/// the label. `accent` colors the label when not focused.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    shortcut: &str,
    is_focused: bool,
    accent: Color,
) {
    let (border_style, text_style) = if is_focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(accent),
        )
    };

    let line = Line::from(vec![
        Span::styled(format!(" {label} "), text_style),
        Span::styled(format!("{shortcut} "), Style::default().fg(Color::DarkGray)),
    ]);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
