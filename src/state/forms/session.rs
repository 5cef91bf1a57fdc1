//! Form session: field values, tech rows, focus, last errors and output

use super::field::FormField;
use super::tech_list::{RowId, TechColumn, TechList, TechRow};
use crate::validation::{
    FieldPath, FormInput, FormVariant, Schema, SchemaSettings, ValidationError, ValidationErrors,
};
use anyhow::Result;

/// Which input or button has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Email,
    Password,
    Tech(RowId, TechColumn),
    AddTech,
    Submit,
}

/// Result of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { error_count: usize },
}

#[derive(Debug, Clone)]
pub struct FormSession {
    variant: FormVariant,
    schema: Schema,
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub techs: TechList,
    errors: ValidationErrors,
    output: Option<String>,
    focus: Focus,
    /// Set by the first submit; from then on every edit re-validates
    submitted: bool,
}

impl FormSession {
    pub fn new(variant: FormVariant, settings: &SchemaSettings) -> Self {
        Self {
            variant,
            schema: Schema::for_variant(variant, settings),
            name: FormField::text("Name"),
            email: FormField::text("E-mail"),
            password: FormField::masked("Password"),
            techs: TechList::new(),
            errors: ValidationErrors::new(),
            output: None,
            focus: Focus::Name,
            submitted: false,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn has_password(&self) -> bool {
        self.schema.has_password()
    }

    pub fn has_techs(&self) -> bool {
        self.schema.has_techs()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, path: &FieldPath) -> Option<&ValidationError> {
        self.errors.get(path)
    }

    /// Pretty-printed payload of the last accepted submit
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Inputs and buttons in tab order
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Name, Focus::Email];
        if self.has_password() {
            order.push(Focus::Password);
        }
        if self.has_techs() {
            for row in self.techs.iter() {
                order.push(Focus::Tech(row.id, TechColumn::Title));
                order.push(Focus::Tech(row.id, TechColumn::Knowledge));
            }
            order.push(Focus::AddTech);
        }
        order.push(Focus::Submit);
        order
    }

    pub fn next_focus(&mut self) {
        self.step_focus(true);
    }

    pub fn prev_focus(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let len = order.len();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.focus = order[next];
    }

    /// Jump between the title and knowledge inputs of the focused row
    pub fn switch_column(&mut self) {
        if let Focus::Tech(id, column) = self.focus {
            let other = match column {
                TechColumn::Title => TechColumn::Knowledge,
                TechColumn::Knowledge => TechColumn::Title,
            };
            self.focus = Focus::Tech(id, other);
        }
    }

    fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus {
            Focus::Name => Some(&mut self.name),
            Focus::Email => Some(&mut self.email),
            Focus::Password => Some(&mut self.password),
            Focus::Tech(id, column) => self.techs.get_by_id_mut(id).map(|row| row.field_mut(column)),
            Focus::AddTech | Focus::Submit => None,
        }
    }

    /// Type a character into the focused input
    pub fn input_char(&mut self, c: char) {
        let accepted = self
            .active_field_mut()
            .is_some_and(|field| field.push_char(c));
        if accepted {
            self.after_edit();
        }
    }

    /// Delete the last character of the focused input
    pub fn backspace(&mut self) {
        let changed = self.active_field_mut().is_some_and(FormField::pop_char);
        if changed {
            self.after_edit();
        }
    }

    /// Append a blank row and focus its title. No-op without a tech list.
    pub fn add_tech(&mut self) -> Option<RowId> {
        if !self.has_techs() {
            return None;
        }
        let id = self.techs.append();
        tracing::debug!("Added tech row {id}");
        self.focus = Focus::Tech(id, TechColumn::Title);
        self.after_edit();
        Some(id)
    }

    /// Remove the row at `index`. Focus on that row moves to its neighbour.
    pub fn remove_tech(&mut self, index: usize) -> Option<TechRow> {
        let removed = self.techs.remove(index)?;
        tracing::debug!("Removed tech row {} at position {index}", removed.id);

        if let Focus::Tech(id, column) = self.focus {
            if id == removed.id {
                self.focus = self
                    .techs
                    .get(index)
                    .or_else(|| index.checked_sub(1).and_then(|i| self.techs.get(i)))
                    .map(|row| Focus::Tech(row.id, column))
                    .unwrap_or(Focus::AddTech);
            }
        }

        self.after_edit();
        Some(removed)
    }

    pub fn remove_focused_tech(&mut self) -> Option<TechRow> {
        let Focus::Tech(id, _) = self.focus else {
            return None;
        };
        let index = self.techs.position(id)?;
        self.remove_tech(index)
    }

    /// Snapshot of the current values for validation
    pub fn to_input(&self) -> FormInput {
        FormInput {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            password: if self.has_password() {
                self.password.as_text().to_string()
            } else {
                String::new()
            },
            techs: self.has_techs().then(|| self.techs.to_inputs()),
        }
    }

    /// Validate the form. On success the pretty-printed payload replaces the
    /// output and errors are cleared; on failure only the errors change.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        self.submitted = true;
        match self.schema.validate(&self.to_input()) {
            Ok(output) => {
                self.output = Some(output.to_pretty_json()?);
                self.errors = ValidationErrors::new();
                tracing::info!("Form accepted ({} variant)", self.variant);
                Ok(SubmitOutcome::Accepted)
            }
            Err(errors) => {
                tracing::debug!("Form rejected:\n{}", errors.summary());
                let error_count = errors.len();
                self.errors = errors;
                Ok(SubmitOutcome::Rejected { error_count })
            }
        }
    }

    fn after_edit(&mut self) {
        if self.submitted {
            self.revalidate();
        }
    }

    fn revalidate(&mut self) {
        self.errors = self
            .schema
            .validate(&self.to_input())
            .err()
            .unwrap_or_default();
    }

    /// Start over with the same variant and rules
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.techs.clear();
        self.errors = ValidationErrors::new();
        self.output = None;
        self.focus = Focus::Name;
        self.submitted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(variant: FormVariant) -> FormSession {
        FormSession::new(variant, &SchemaSettings::default())
    }

    fn type_text(session: &mut FormSession, text: &str) {
        for c in text.chars() {
            session.input_char(c);
        }
    }

    fn add_row(session: &mut FormSession, title: &str, knowledge: &str) -> RowId {
        let id = session.add_tech().unwrap();
        type_text(session, title);
        session.switch_column();
        type_text(session, knowledge);
        id
    }

    fn filled_full_session() -> FormSession {
        let mut s = session(FormVariant::Full);
        s.name.set_text("ana silva");
        s.email.set_text("ana@gmail.com");
        s.password.set_text("123456");
        add_row(&mut s, "Go", "80");
        add_row(&mut s, "Rust", "60");
        s
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_basic_order() {
            let s = session(FormVariant::Basic);
            assert_eq!(
                s.focus_order(),
                vec![Focus::Name, Focus::Email, Focus::Submit]
            );
        }

        #[test]
        fn test_full_order_includes_rows() {
            let mut s = session(FormVariant::Full);
            let id = s.add_tech().unwrap();
            assert_eq!(
                s.focus_order(),
                vec![
                    Focus::Name,
                    Focus::Email,
                    Focus::Password,
                    Focus::Tech(id, TechColumn::Title),
                    Focus::Tech(id, TechColumn::Knowledge),
                    Focus::AddTech,
                    Focus::Submit,
                ]
            );
        }

        #[test]
        fn test_next_and_prev_wrap() {
            let mut s = session(FormVariant::Credentials);
            s.prev_focus();
            assert_eq!(s.focus(), Focus::Submit);
            s.next_focus();
            assert_eq!(s.focus(), Focus::Name);
            s.next_focus();
            s.next_focus();
            assert_eq!(s.focus(), Focus::Password);
        }

        #[test]
        fn test_add_tech_focuses_new_title() {
            let mut s = session(FormVariant::Full);
            let id = s.add_tech().unwrap();
            assert_eq!(s.focus(), Focus::Tech(id, TechColumn::Title));
        }

        #[test]
        fn test_switch_column_only_in_rows() {
            let mut s = session(FormVariant::Full);
            s.switch_column();
            assert_eq!(s.focus(), Focus::Name);
            let id = s.add_tech().unwrap();
            s.switch_column();
            assert_eq!(s.focus(), Focus::Tech(id, TechColumn::Knowledge));
        }

        #[test]
        fn test_removing_focused_row_moves_to_next_row() {
            let mut s = session(FormVariant::Full);
            let first = add_row(&mut s, "Go", "80");
            let second = add_row(&mut s, "Rust", "60");
            s.focus = Focus::Tech(first, TechColumn::Knowledge);
            let removed = s.remove_focused_tech().unwrap();
            assert_eq!(removed.id, first);
            assert_eq!(s.focus(), Focus::Tech(second, TechColumn::Knowledge));
        }

        #[test]
        fn test_removing_last_row_moves_to_previous_then_button() {
            let mut s = session(FormVariant::Full);
            let first = add_row(&mut s, "Go", "80");
            add_row(&mut s, "Rust", "60");
            s.remove_focused_tech();
            assert_eq!(s.focus(), Focus::Tech(first, TechColumn::Knowledge));
            s.remove_focused_tech();
            assert_eq!(s.focus(), Focus::AddTech);
            assert!(s.techs.is_empty());
        }

        #[test]
        fn test_removing_other_row_keeps_focus_on_same_row() {
            let mut s = session(FormVariant::Full);
            add_row(&mut s, "Go", "80");
            let second = add_row(&mut s, "Rust", "60");
            s.remove_tech(0);
            assert_eq!(s.focus(), Focus::Tech(second, TechColumn::Knowledge));
            assert_eq!(s.techs.position(second), Some(0));
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_goes_to_focused_field() {
            let mut s = session(FormVariant::Credentials);
            type_text(&mut s, "ana");
            s.next_focus();
            type_text(&mut s, "ana@gmail.com");
            s.backspace();
            assert_eq!(s.name.as_text(), "ana");
            assert_eq!(s.email.as_text(), "ana@gmail.co");
        }

        #[test]
        fn test_typing_on_button_is_ignored() {
            let mut s = session(FormVariant::Basic);
            s.prev_focus();
            assert_eq!(s.focus(), Focus::Submit);
            type_text(&mut s, "x");
            assert_eq!(s.to_input(), FormInput::default());
        }

        #[test]
        fn test_add_tech_without_list_is_noop() {
            let mut s = session(FormVariant::Credentials);
            assert!(s.add_tech().is_none());
            assert!(s.techs.is_empty());
        }

        #[test]
        fn test_to_input_hides_disabled_sections() {
            let mut s = session(FormVariant::Basic);
            s.password.set_text("ignored");
            let input = s.to_input();
            assert_eq!(input.password, "");
            assert_eq!(input.techs, None);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepted_submit_stores_pretty_json() {
            let mut s = filled_full_session();
            assert_eq!(s.submit().unwrap(), SubmitOutcome::Accepted);
            let value: serde_json::Value = serde_json::from_str(s.output().unwrap()).unwrap();
            assert_eq!(
                value,
                serde_json::json!({
                    "name": "Ana Silva",
                    "email": "ana@gmail.com",
                    "password": "123456",
                    "techs": [
                        { "title": "Go", "knowledge": 80 },
                        { "title": "Rust", "knowledge": 60 }
                    ]
                })
            );
            assert!(s.output().unwrap().contains("\n  \"name\""));
            assert!(s.errors().is_empty());
        }

        #[test]
        fn test_rejected_submit_keeps_previous_output() {
            let mut s = filled_full_session();
            s.submit().unwrap();
            let previous = s.output().map(str::to_string);

            s.remove_tech(1);
            let outcome = s.submit().unwrap();
            assert_eq!(outcome, SubmitOutcome::Rejected { error_count: 1 });
            assert_eq!(s.output().map(str::to_string), previous);
            assert_eq!(
                s.error_for(&FieldPath::Techs),
                Some(&ValidationError::TooFewEntries { min: 2 })
            );
        }

        #[test]
        fn test_no_errors_before_first_submit() {
            let mut s = session(FormVariant::Full);
            type_text(&mut s, "a");
            assert!(s.errors().is_empty());
        }

        #[test]
        fn test_edits_revalidate_after_submit() {
            let mut s = session(FormVariant::Credentials);
            s.submit().unwrap();
            assert!(s.error_for(&FieldPath::Name).is_some());

            type_text(&mut s, "ana");
            assert!(s.error_for(&FieldPath::Name).is_none());
            assert!(s.error_for(&FieldPath::Email).is_some());
            assert!(s.output().is_none());
        }

        #[test]
        fn test_rows_removed_after_submit_update_errors() {
            let mut s = filled_full_session();
            let id = s.add_tech().unwrap();
            s.submit().unwrap();
            assert!(s.error_for(&FieldPath::TechTitle(2)).is_some());

            let index = s.techs.position(id).unwrap();
            s.remove_tech(index);
            assert!(s.errors().is_empty());
        }

        #[test]
        fn test_reset_clears_everything() {
            let mut s = filled_full_session();
            s.submit().unwrap();
            s.reset();
            assert_eq!(s.focus(), Focus::Name);
            assert!(s.output().is_none());
            assert!(s.techs.is_empty());
            assert_eq!(s.to_input().name, "");

            type_text(&mut s, "x");
            assert!(s.errors().is_empty());
        }
    }
}
