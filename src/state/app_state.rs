//! Application state definitions

use super::forms::FormSession;
use crate::validation::{FormVariant, SchemaSettings};
use std::collections::VecDeque;

/// Main application state
pub struct AppState {
    pub session: FormSession,
    /// One-line feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// Errors waiting to be shown in the modal dialog, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(variant: FormVariant, settings: &SchemaSettings) -> Self {
        Self {
            session: FormSession::new(variant, settings),
            status_message: None,
            error_queue: VecDeque::new(),
        }
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FormVariant::default(), &SchemaSettings::default())
    }
}
