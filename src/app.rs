//! Application state and core logic

use crate::clipboard::ClipboardSink;
use crate::state::{AppState, Focus, SubmitOutcome};
use crate::validation::{FormVariant, SchemaSettings};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Destination of the copy shortcut
    clipboard: Box<dyn ClipboardSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(
        variant: FormVariant,
        settings: &SchemaSettings,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        Self {
            state: AppState::new(variant, settings),
            clipboard,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit()?,
            KeyCode::Char('n') if ctrl => self.add_tech(),
            KeyCode::Char('d') if ctrl => self.remove_focused_tech(),
            KeyCode::Char('r') if ctrl => {
                self.state.session.reset();
                self.state.status_message = Some("Form cleared".to_string());
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_output();
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.session.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.session.prev_focus(),
            KeyCode::Left | KeyCode::Right => self.state.session.switch_column(),
            KeyCode::Enter => match self.state.session.focus() {
                Focus::AddTech => self.add_tech(),
                Focus::Submit => self.submit()?,
                _ => self.state.session.next_focus(),
            },
            KeyCode::Backspace => self.state.session.backspace(),
            KeyCode::Char(c) if !ctrl => self.state.session.input_char(c),
            _ => {}
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        let message = match self.state.session.submit()? {
            SubmitOutcome::Accepted => "Form submitted".to_string(),
            SubmitOutcome::Rejected { error_count } => {
                format!("{error_count} field(s) need attention")
            }
        };
        self.state.status_message = Some(message);
        Ok(())
    }

    fn add_tech(&mut self) {
        if self.state.session.add_tech().is_none() {
            self.state.status_message =
                Some("This form has no technology list".to_string());
        }
    }

    fn remove_focused_tech(&mut self) {
        match self.state.session.remove_focused_tech() {
            Some(row) => {
                let label = if row.title.is_empty() {
                    "row"
                } else {
                    row.title.as_text()
                };
                self.state.status_message = Some(format!("Removed {label}"));
            }
            None => {
                self.state.status_message =
                    Some("Focus a technology row to remove it".to_string());
            }
        }
    }

    /// Copy the last accepted payload to the clipboard
    fn copy_output(&mut self) {
        let Some(output) = self.state.session.output().map(str::to_owned) else {
            self.push_error("Nothing to copy yet. Submit the form first.");
            return;
        };
        match self.clipboard.set_text(&output) {
            Ok(()) => self.state.status_message = Some("Copied output to clipboard".to_string()),
            Err(err) => self.push_error(format!("Failed to copy to clipboard: {err}")),
        }
    }
}
