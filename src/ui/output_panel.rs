//! Output panel showing the last accepted payload

use crate::state::FormSession;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, session: &FormSession) {
    let (text, style, border) = match session.output() {
        Some(json) => (json, Style::default().fg(Color::White), Color::Green),
        None => (
            "Submit the form to see the payload here.",
            Style::default().fg(Color::DarkGray),
            Color::DarkGray,
        ),
    };

    let panel = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Output ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(panel, area);
}
