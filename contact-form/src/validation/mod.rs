//! Field validation for the contact form.
//!
//! Rules are attached per field with a fluent builder. A field reports the
//! first rule it fails; fields without rules always pass.
//!
//! # Example
//!
//! ```ignore
//! use contact_form::validation::Validator;
//!
//! let validator = Validator::new()
//!     .field(Field::FirstName)
//!         .min_length(5)
//!     .field(Field::LastName)
//!         .required()
//!     .field(Field::Email)
//!         .email()
//!     .build();
//!
//! let result = validator.validate(&state);
//! if result.is_valid() {
//!     // show the submitted values
//! }
//! ```

mod email;
mod error;
mod result;
mod rules;
mod validator;

pub use email::is_valid_email;
pub use error::{ErrorKind, FieldError};
pub use result::{ValidationErrors, ValidationResult};
pub use rules::contact_validator;
pub use validator::{FieldBuilder, Validator};
