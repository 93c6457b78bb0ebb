//! Contact form domain layer
//!
//! Field values and validation display live on [`ContactForm`]; the
//! [`SubmissionController`] owns the submit lifecycle around it.

mod field;
mod form;
mod submission;
mod transient;
mod validator;

pub use field::{FieldMark, FieldName, FormField};
pub use form::{ContactForm, FormPayload, SubmitButton};
pub use submission::{SubmissionController, SubmitOutcome, SubmitStart};
pub use transient::{MessageKind, TransientMessage};

#[cfg(test)]
pub use form::SUBMIT_LABEL;
