//! Validator builder for fluent validation API.

use std::fmt;

use super::email::is_valid_email;
use super::error::FieldError;
use super::result::ValidationResult;
use crate::field::Field;
use crate::state::FormState;

/// Type alias for validation rule closures.
type Rule = Box<dyn Fn(&str) -> Result<(), FieldError> + Send + Sync>;

/// Internal representation of a field being validated.
struct FieldEntry {
    field: Field,
    rules: Vec<Rule>,
}

/// Rule set for the fields of a form.
///
/// # Example
///
/// ```ignore
/// let validator = Validator::new()
///     .field(Field::LastName)
///         .required()
///     .build();
///
/// assert!(validator.validate_field(Field::LastName, "").is_some());
/// ```
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Start adding rules for a field.
    pub fn field(self, field: Field) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            field,
            rules: Vec::new(),
        }
    }

    /// Check one value against the rules of `field`.
    /// Returns the first failing rule's error.
    pub fn validate_field(&self, field: Field, value: &str) -> Option<FieldError> {
        self.fields
            .iter()
            .filter(|entry| entry.field == field)
            .flat_map(|entry| entry.rules.iter())
            .find_map(|rule| rule(value).err())
    }

    /// Check every field of a form.
    pub fn validate(&self, state: &FormState) -> ValidationResult {
        let errors: Vec<FieldError> = Field::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field, state.get(field)))
            .collect();

        log::debug!("[validation] {} field error(s)", errors.len());

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.fields
                    .iter()
                    .map(|entry| (entry.field, entry.rules.len())),
            )
            .finish()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    field: Field,
    rules: Vec<Rule>,
}

impl FieldBuilder {
    /// Add a custom rule. `check` returns true when the value is acceptable.
    pub fn rule<F>(mut self, check: F, error: FieldError) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Box::new(move |value| {
            if check(value) {
                Ok(())
            } else {
                Err(error.clone())
            }
        }));
        self
    }

    /// Require the field to be non-empty (ignoring surrounding whitespace).
    pub fn required(self) -> Self {
        let error = FieldError::Required { field: self.field };
        self.rule(|v| !v.trim().is_empty(), error)
    }

    /// Require at least `min` characters, ignoring surrounding whitespace.
    pub fn min_length(self, min: usize) -> Self {
        let error = FieldError::TooShort {
            field: self.field,
            min,
        };
        self.rule(move |v| v.trim().chars().count() >= min, error)
    }

    /// Require a valid email address. Empty values fail too.
    pub fn email(self) -> Self {
        let error = FieldError::InvalidEmail { field: self.field };
        self.rule(is_valid_email, error)
    }

    /// Continue to the next field.
    pub fn field(self, field: Field) -> FieldBuilder {
        self.build().field(field)
    }

    /// Finalize this field and return the validator.
    pub fn build(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            field: self.field,
            rules: self.rules,
        });
        validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_failing_rule_wins() {
        let validator = Validator::new()
            .field(Field::LastName)
            .required()
            .min_length(3)
            .build();

        assert_eq!(
            validator.validate_field(Field::LastName, ""),
            Some(FieldError::Required {
                field: Field::LastName
            })
        );
        assert_eq!(
            validator.validate_field(Field::LastName, "Li"),
            Some(FieldError::TooShort {
                field: Field::LastName,
                min: 3
            })
        );
        assert_eq!(validator.validate_field(Field::LastName, "Lin"), None);
    }

    #[test]
    fn fields_without_rules_pass() {
        let validator = Validator::new().field(Field::Email).email().build();
        assert_eq!(validator.validate_field(Field::Message, ""), None);
    }

    #[test]
    fn min_length_counts_chars_after_trimming() {
        let validator = Validator::new().field(Field::FirstName).min_length(5).build();
        assert!(validator.validate_field(Field::FirstName, "  Rod  ").is_some());
        assert!(validator.validate_field(Field::FirstName, "Jürgen").is_none());
    }

    #[test]
    fn validate_collects_errors_in_field_order() {
        let validator = Validator::new()
            .field(Field::Email)
            .email()
            .field(Field::FirstName)
            .required()
            .build();

        let result = validator.validate(&FormState::default());
        let fields: Vec<_> = result.errors().iter().map(FieldError::field).collect();
        assert_eq!(fields, vec![Field::FirstName, Field::Email]);
        assert!(!result.is_valid());
    }
}
