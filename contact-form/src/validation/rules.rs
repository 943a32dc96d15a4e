use super::Validator;
use crate::field::Field;

/// Shortest first name the form accepts.
pub const FIRST_NAME_MIN_LENGTH: usize = 5;

/// Rules of the contact form. The message field is optional and unchecked.
pub fn contact_validator() -> Validator {
    Validator::new()
        .field(Field::FirstName)
        .min_length(FIRST_NAME_MIN_LENGTH)
        .field(Field::LastName)
        .required()
        .field(Field::Email)
        .email()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ErrorKind, FieldError};

    #[test]
    fn messages_match_the_form_copy() {
        let validator = contact_validator();
        let messages: Vec<String> = [Field::FirstName, Field::LastName, Field::Email]
            .into_iter()
            .filter_map(|field| validator.validate_field(field, ""))
            .map(|error| error.to_string())
            .collect();

        assert_eq!(
            messages,
            vec![
                "firstName must have at least 5 characters.",
                "lastName is a required field.",
                "email must be a valid email address.",
            ]
        );
    }

    #[test]
    fn empty_first_name_is_a_length_error() {
        let error = contact_validator()
            .validate_field(Field::FirstName, "")
            .unwrap();
        assert_eq!(error.kind(), ErrorKind::Length);
    }

    #[test]
    fn whitespace_last_name_is_required_error() {
        assert_eq!(
            contact_validator().validate_field(Field::LastName, "   "),
            Some(FieldError::Required {
                field: Field::LastName
            })
        );
    }

    #[test]
    fn message_is_never_rejected() {
        assert_eq!(contact_validator().validate_field(Field::Message, ""), None);
    }
}
