use tuidom::{Component, Element, Event, View};

use crate::field::Field;
use crate::state::{FormState, Phase, SubmittedValues};
use crate::validation::{FieldError, ValidationErrors, ValidationResult, Validator, contact_validator};

/// Element ID of the submit button.
pub const SUBMIT_ID: &str = "submit";

/// Inputs to the form's reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Change(Field, String),
    Submit,
}

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(SubmittedValues),
    Rejected(Vec<FieldError>),
}

/// The contact form: field values, the errors shown next to them, and the
/// last accepted submission.
#[derive(Debug)]
pub struct ContactForm {
    state: FormState,
    errors: ValidationErrors,
    submitted: Option<SubmittedValues>,
    show_submitted: bool,
    phase: Phase,
    validator: Validator,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            state: FormState::default(),
            errors: ValidationErrors::new(),
            submitted: None,
            show_submitted: false,
            phase: Phase::Idle,
            validator: contact_validator(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Snapshot of the last accepted submit, even while it is hidden.
    pub fn last_submission(&self) -> Option<&SubmittedValues> {
        self.submitted.as_ref()
    }

    /// The submission currently shown under the form.
    pub fn displayed_submission(&self) -> Option<&SubmittedValues> {
        self.submitted.as_ref().filter(|_| self.show_submitted)
    }

    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::Change(field, value) => self.change(field, value),
            Msg::Submit => {
                self.submit();
            }
        }
    }

    /// Store a new value and re-check that field only.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.state.set(field, value);
        let error = self.validator.validate_field(field, self.state.get(field));
        log::debug!("[form] {field} changed, error: {error:?}");
        self.errors.set(field, error);
        self.phase = Phase::Editing;
    }

    /// Re-check every field; on success snapshot and show the values.
    pub fn submit(&mut self) -> SubmitOutcome {
        let result = self.validator.validate(&self.state);
        log::debug!("[form] submit, valid: {}", result.is_valid());
        self.errors = ValidationErrors::from(&result);

        match result {
            ValidationResult::Valid => {
                let values = SubmittedValues::capture(&self.state);
                log::info!("[form] submission accepted");
                self.submitted = Some(values.clone());
                self.show_submitted = true;
                self.phase = Phase::Submitted;
                SubmitOutcome::Accepted(values)
            }
            ValidationResult::Invalid(errors) => {
                log::warn!("[form] submission rejected with {} error(s)", errors.len());
                for error in &errors {
                    log::debug!("[form] {} failed: {:?}", error.field(), error.kind());
                }
                self.show_submitted = false;
                self.phase = Phase::Editing;
                SubmitOutcome::Rejected(errors)
            }
        }
    }
}

impl Component for ContactForm {
    fn element(&self, view: &View<'_>) -> Element {
        crate::view::render(self, view)
    }

    fn on_event(&mut self, event: &Event) {
        match event {
            Event::Change { target, text } => {
                if let Ok(field) = target.parse::<Field>() {
                    self.update(Msg::Change(field, text.clone()));
                }
            }
            // Enter in a single-line field submits, as in an HTML form
            Event::Submit { target } if target.parse::<Field>().is_ok() => {
                self.update(Msg::Submit);
            }
            Event::Click {
                target: Some(target),
                ..
            } if target == SUBMIT_ID => self.update(Msg::Submit),
            Event::Key {
                target: Some(target),
                ..
            } if target == SUBMIT_ID && event.is_activation() => self.update(Msg::Submit),
            _ => {}
        }
    }
}
