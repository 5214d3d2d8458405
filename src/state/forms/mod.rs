//! Form domain layer
//!
//! Field descriptors for the quote form and the `FormState` record they
//! read from and write to.

mod field;
mod form_state;

pub use field::{ChoiceField, FormField, TextField};
pub use form_state::{FieldUpdate, FormState, SubmissionPayload};
