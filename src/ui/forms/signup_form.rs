//! Registration form rendering

use super::field_renderer::{draw_error_line, draw_field, FIELD_HEIGHT};
use crate::platform::{ADD_TECH_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Focus, FormSession, RowId, TechColumn, TechRow};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::validation::FieldPath;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the knowledge input next to each title
const KNOWLEDGE_WIDTH: u16 = 22;

/// Vertical slices of the form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Name,
    Email,
    Password,
    TechHeader,
    TechRow(usize),
    TechListError,
    AddTech,
    Submit,
}

impl Section {
    fn height(&self) -> u16 {
        match self {
            Section::Name | Section::Email | Section::Password | Section::TechRow(_) => {
                FIELD_HEIGHT
            }
            Section::TechHeader | Section::TechListError => 1,
            Section::AddTech | Section::Submit => BUTTON_HEIGHT,
        }
    }
}

fn sections(session: &FormSession) -> Vec<Section> {
    let mut sections = vec![Section::Name, Section::Email];
    if session.has_password() {
        sections.push(Section::Password);
    }
    if session.has_techs() {
        sections.push(Section::TechHeader);
        sections.extend((0..session.techs.len()).map(Section::TechRow));
        sections.push(Section::TechListError);
        sections.push(Section::AddTech);
    }
    sections.push(Section::Submit);
    sections
}

/// Slice of `sections` that fits on screen, with scroll markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    first: usize,
    end: usize,
    more_above: bool,
    more_below: bool,
}

/// Pick the sections to draw so the focused one is always on screen.
///
/// When everything fits the whole form is shown. Otherwise two rows are kept
/// for the `^`/`v` markers and the window starts as high as it can while
/// still reaching the focused section.
fn visible_window(sections: &[Section], focused: usize, height: u16) -> Window {
    let total: u16 = sections.iter().map(Section::height).sum();
    if total <= height {
        return Window {
            first: 0,
            end: sections.len(),
            more_above: false,
            more_below: false,
        };
    }

    let usable = height.saturating_sub(2);
    let focused = focused.min(sections.len().saturating_sub(1));
    let reach = |first: usize| -> u16 { sections[first..=focused].iter().map(Section::height).sum() };

    let mut first = 0;
    while first < focused && reach(first) > usable {
        first += 1;
    }

    let mut used = 0;
    let mut end = first;
    for section in &sections[first..] {
        if used + section.height() > usable {
            break;
        }
        used += section.height();
        end += 1;
    }
    // Always show at least the focused section
    let end = end.max(first + 1).min(sections.len());

    Window {
        first,
        end,
        more_above: first > 0,
        more_below: end < sections.len(),
    }
}

fn row_index(session: &FormSession, id: RowId) -> Option<usize> {
    session.techs.position(id)
}

/// Index into `sections` of whatever holds focus
fn focused_section(session: &FormSession, sections: &[Section]) -> usize {
    let target = match session.focus() {
        Focus::Name => Section::Name,
        Focus::Email => Section::Email,
        Focus::Password => Section::Password,
        Focus::Tech(id, _) => match row_index(session, id) {
            Some(index) => Section::TechRow(index),
            None => return 0,
        },
        Focus::AddTech => Section::AddTech,
        Focus::Submit => Section::Submit,
    };
    sections.iter().position(|s| *s == target).unwrap_or(0)
}

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, session: &FormSession) {
    let block = Block::default()
        .title(format!(" Sign up ({}) ", session.variant()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = sections(session);
    let window = visible_window(&sections, focused_section(session, &sections), inner.height);
    let shown = &sections[window.first..window.end];

    let mut constraints = Vec::with_capacity(shown.len() + 3);
    if window.more_above {
        constraints.push(Constraint::Length(1));
    }
    constraints.extend(shown.iter().map(|s| Constraint::Length(s.height())));
    if window.more_below {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);
    let mut chunks = chunks.iter().copied();

    if window.more_above {
        if let Some(chunk) = chunks.next() {
            draw_scroll_marker(frame, chunk, "^");
        }
    }
    for (section, chunk) in shown.iter().zip(chunks.by_ref()) {
        draw_section(frame, chunk, session, *section);
    }
    if window.more_below {
        if let Some(chunk) = chunks.next() {
            draw_scroll_marker(frame, chunk, "v");
        }
    }
}

fn draw_scroll_marker(frame: &mut Frame, area: Rect, marker: &str) {
    let indicator = Paragraph::new(marker)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(indicator, area);
}

fn draw_section(frame: &mut Frame, chunk: Rect, session: &FormSession, section: Section) {
    let focus = session.focus();
    match section {
        Section::Name => draw_field(
            frame,
            chunk,
            &session.name,
            focus == Focus::Name,
            session.error_for(&FieldPath::Name),
        ),
        Section::Email => draw_field(
            frame,
            chunk,
            &session.email,
            focus == Focus::Email,
            session.error_for(&FieldPath::Email),
        ),
        Section::Password => draw_field(
            frame,
            chunk,
            &session.password,
            focus == Focus::Password,
            session.error_for(&FieldPath::Password),
        ),
        Section::TechHeader => draw_tech_header(frame, chunk, session),
        Section::TechRow(index) => {
            if let Some(row) = session.techs.get(index) {
                draw_tech_row(frame, chunk, session, index, row);
            }
        }
        Section::TechListError => {
            if let Some(error) = session.error_for(&FieldPath::Techs) {
                draw_error_line(frame, chunk, error);
            }
        }
        Section::AddTech => render_button(
            frame,
            chunk,
            "+ Add technology",
            ADD_TECH_SHORTCUT,
            focus == Focus::AddTech,
            Color::Green,
        ),
        Section::Submit => render_button(
            frame,
            chunk,
            "Submit",
            SUBMIT_SHORTCUT,
            focus == Focus::Submit,
            Color::Blue,
        ),
    }
}

fn draw_tech_header(frame: &mut Frame, area: Rect, session: &FormSession) {
    let detail = if session.techs.is_empty() {
        format!(" (none yet, {ADD_TECH_SHORTCUT} adds one)")
    } else {
        format!(" ({})", session.techs.len())
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Technologies",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, area);
}

fn draw_tech_row(frame: &mut Frame, area: Rect, session: &FormSession, index: usize, row: &TechRow) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(KNOWLEDGE_WIDTH)])
        .split(area);

    for (column, chunk, path) in [
        (TechColumn::Title, chunks[0], FieldPath::TechTitle(index)),
        (TechColumn::Knowledge, chunks[1], FieldPath::TechKnowledge(index)),
    ] {
        draw_field(
            frame,
            chunk,
            row.field(column),
            session.focus() == Focus::Tech(row.id, column),
            session.error_for(&path),
        );
    }
}
