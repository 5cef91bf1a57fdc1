//! Field rules and the generic checker that evaluates them

use super::error::ValidationError;
use validator::ValidateEmail;

/// One declarative constraint on a raw text value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Must contain something other than whitespace
    Required,
    /// Must be a syntactically valid e-mail address (HTML5 rules)
    Email,
    /// Must end with the given suffix, e.g. `@gmail.com`
    EndsWith(String),
    /// Must be at least this many characters long
    MinChars(usize),
    /// Must coerce to a whole number within `min..=max`
    WholeNumber { min: u32, max: u32 },
}

impl Rule {
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            Rule::Required => {
                if value.trim().is_empty() {
                    return Err(ValidationError::EmptyField);
                }
            }
            Rule::Email => {
                if !value.validate_email() || !has_dot_atom_shape(value) {
                    return Err(ValidationError::InvalidFormat);
                }
            }
            Rule::EndsWith(suffix) => {
                if !value.ends_with(suffix.as_str()) {
                    return Err(ValidationError::DomainRestricted {
                        suffix: suffix.clone(),
                    });
                }
            }
            Rule::MinChars(min) => {
                if value.chars().count() < *min {
                    return Err(ValidationError::TooShort { min: *min });
                }
            }
            Rule::WholeNumber { min, max } => {
                let in_range = coerce_number(value).is_some_and(|n| {
                    n.fract() == 0.0 && n >= f64::from(*min) && n <= f64::from(*max)
                });
                if !in_range {
                    return Err(ValidationError::OutOfRange {
                        min: *min,
                        max: *max,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Run `rules` in order and report the first one that fails.
pub fn check(rules: &[Rule], value: &str) -> Result<(), ValidationError> {
    rules.iter().try_for_each(|rule| rule.check(value))
}

/// Stricter than `validate_email`: the local part has no leading, trailing or
/// doubled dots and the domain has at least two non-empty labels.
fn has_dot_atom_shape(address: &str) -> bool {
    let Some((local, domain)) = address.rsplit_once('@') else {
        return false;
    };
    let local_ok = !local.starts_with('.') && !local.ends_with('.') && !local.contains("..");
    let domain_ok = domain.contains('.') && domain.split('.').all(|label| !label.is_empty());
    local_ok && domain_ok
}

/// Coerce typed text to a number.
///
/// Blank text coerces to zero; anything that is not a finite number is `None`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
