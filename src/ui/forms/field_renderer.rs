//! Field rendering utilities for forms

use crate::state::FormField;
use crate::validation::ValidationError;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the error line under it
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field with its validation error underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&ValidationError>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Error message
        ])
        .split(area);

    let border_color = match (is_active, error.is_some()) {
        (true, _) => Color::Cyan,
        (false, true) => Color::Red,
        (false, false) => Color::DarkGray,
    };
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let mut spans = vec![Span::styled(display_value, text_style)];
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    if let Some(error) = error {
        draw_error_line(frame, chunks[1], error);
    }
}

/// Draw a one-line validation message
pub fn draw_error_line(frame: &mut Frame, area: Rect, error: &ValidationError) {
    let line = Paragraph::new(Span::styled(
        format!(" {error}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(line, area);
}
