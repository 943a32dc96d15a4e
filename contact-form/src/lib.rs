//! A contact form component: first name, last name, email and an optional
//! message, validated as the user types and echoed back on a valid submit.
//!
//! The form renders to a [`tuidom`] element tree and can run in a terminal
//! with [`tuidom::run`] or headless with [`tuidom::Harness`].

pub mod field;
pub mod form;
pub mod state;
pub mod validation;
mod view;

pub use field::{Field, UnknownField};
pub use form::{ContactForm, Msg, SUBMIT_ID, SubmitOutcome};
pub use state::{FormState, Phase, SubmittedValues};
pub use validation::{ErrorKind, FieldError, ValidationErrors, ValidationResult, Validator};
