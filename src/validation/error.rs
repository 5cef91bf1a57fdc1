//! Validation error taxonomy and the path-keyed error map

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use thiserror::Error;

/// A single user-facing validation failure.
///
/// The `Display` text is what gets rendered under the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    EmptyField,
    #[error("Invalid e-mail format")]
    InvalidFormat,
    #[error("E-mail must end with {suffix}")]
    DomainRestricted { suffix: String },
    #[error("Must be at least {min} characters")]
    TooShort { min: usize },
    #[error("Must be a whole number between {min} and {max}")]
    OutOfRange { min: u32, max: u32 },
    #[error("Add at least {min} technologies")]
    TooFewEntries { min: usize },
}

/// Locator of a form input, or of one cell inside the tech list.
///
/// Top-level fields sort in on-screen order; tech cells sort titles first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    Name,
    Email,
    Password,
    Techs,
    TechTitle(usize),
    TechKnowledge(usize),
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name => write!(f, "name"),
            FieldPath::Email => write!(f, "email"),
            FieldPath::Password => write!(f, "password"),
            FieldPath::Techs => write!(f, "techs"),
            FieldPath::TechTitle(index) => write!(f, "techs.{index}.title"),
            FieldPath::TechKnowledge(index) => write!(f, "techs.{index}.knowledge"),
        }
    }
}

/// Every failed path of one validation run, at most one error per path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<FieldPath, ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. The first error recorded for a path wins.
    pub fn insert(&mut self, path: FieldPath, error: ValidationError) {
        self.errors.entry(path).or_insert(error);
    }

    pub fn get(&self, path: &FieldPath) -> Option<&ValidationError> {
        self.errors.get(path)
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.errors.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FieldPath, ValidationError> {
        self.errors.iter()
    }

    /// One `path: message` pair per line, for logs.
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(path, error)| format!("{path}: {error}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a FieldPath, &'a ValidationError);
    type IntoIter = btree_map::Iter<'a, FieldPath, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
