//! Form domain layer
//!
//! Field value objects, the repeatable technology rows and the session that
//! ties them to the validation schema.

mod field;
mod session;
mod tech_list;

pub use field::FormField;
pub use session::{Focus, FormSession, SubmitOutcome};
pub use tech_list::{RowId, TechColumn, TechRow};
