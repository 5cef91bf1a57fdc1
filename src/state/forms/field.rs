//! Form field value objects

/// Maximum digits accepted by numeric inputs ("100" is the largest valid value)
pub const NUMERIC_MAX_DIGITS: usize = 3;

/// How a field accepts and displays input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    /// Text rendered as bullets
    Masked,
    /// ASCII digits only, at most `NUMERIC_MAX_DIGITS`
    Numeric,
}

/// Represents a single form input with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub kind: FieldKind,
    value: String,
}

impl FormField {
    fn new(label: &str, kind: FieldKind) -> Self {
        Self {
            label: label.to_string(),
            kind,
            value: String::new(),
        }
    }

    /// Create a new text field
    pub fn text(label: &str) -> Self {
        Self::new(label, FieldKind::Text)
    }

    /// Create a new masked field (passwords)
    pub fn masked(label: &str) -> Self {
        Self::new(label, FieldKind::Masked)
    }

    /// Create a new numeric field
    pub fn numeric(label: &str) -> Self {
        Self::new(label, FieldKind::Numeric)
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the value. Numeric fields drop anything that is not a digit.
    #[cfg(test)]
    pub fn set_text(&mut self, value: &str) {
        self.value.clear();
        for c in value.chars() {
            self.push_char(c);
        }
    }

    /// Push a character to the field value. Returns false if it was rejected.
    pub fn push_char(&mut self, c: char) -> bool {
        match self.kind {
            FieldKind::Text | FieldKind::Masked => {
                if c.is_control() {
                    return false;
                }
                self.value.push(c);
                true
            }
            FieldKind::Numeric => {
                if !c.is_ascii_digit() || self.value.len() >= NUMERIC_MAX_DIGITS {
                    return false;
                }
                self.value.push(c);
                true
            }
        }
    }

    /// Remove the last character. Returns false if the field was already empty.
    pub fn pop_char(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Masked => "•".repeat(self.value.chars().count()),
            FieldKind::Text | FieldKind::Numeric => self.value.clone(),
        }
    }
}
