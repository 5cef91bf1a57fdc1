//! Layout components (form/output split, status bar)

use crate::app::App;
use crate::platform::{
    ADD_TECH_SHORTCUT, COPY_SHORTCUT, REMOVE_TECH_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT,
};
use crate::state::{Focus, FormSession};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into form (left), output (right) and the status bar row
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Form
            Constraint::Percentage(45), // Output
        ])
        .split(rows[0]);

    (columns[0], columns[1], rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        focus_hints(&app.state.session),
        Style::default().fg(Color::Gray),
    )];

    let errors = app.state.session.errors();
    if !errors.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} error(s)", errors.len()),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever currently has focus
fn focus_hints(session: &FormSession) -> String {
    let mut hints = vec!["Tab:next".to_string()];
    match session.focus() {
        Focus::Tech(..) => {
            hints.push("←/→:column".to_string());
            hints.push(format!("{REMOVE_TECH_SHORTCUT}:remove"));
        }
        Focus::AddTech => hints.push("Enter:add".to_string()),
        Focus::Submit => hints.push("Enter:submit".to_string()),
        Focus::Name | Focus::Email | Focus::Password => {}
    }
    if session.has_techs() {
        hints.push(format!("{ADD_TECH_SHORTCUT}:add"));
    }
    hints.push(format!("{SUBMIT_SHORTCUT}:submit"));
    hints.push(format!("{RESET_SHORTCUT}:reset"));
    if session.output().is_some() {
        hints.push(format!("{COPY_SHORTCUT}:copy"));
    }
    format!(" {}", hints.join("  "))
}
