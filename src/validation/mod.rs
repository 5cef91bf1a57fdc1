//! Declarative validation of the registration form
//!
//! A [`Schema`] is plain data: a list of [`Rule`](rules::Rule)s per field plus an optional
//! [`ArrayRule`](schema::ArrayRule) for the technology rows. [`Schema::validate`] evaluates every
//! rule, collects failures into a path-keyed [`ValidationErrors`] map and,
//! when nothing failed, returns the transformed [`NormalizedOutput`](types::NormalizedOutput).

mod error;
mod rules;
mod schema;
mod transform;
mod types;
mod variant;

pub use error::{FieldPath, ValidationError, ValidationErrors};
pub use schema::{Schema, SchemaSettings};
pub use types::{FormInput, TechEntryInput};
pub use variant::FormVariant;
