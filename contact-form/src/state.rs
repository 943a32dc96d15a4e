use crate::field::Field;

/// Current values of every input. Updated on each keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional; empty means no message.
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Snapshot of the form taken when a submit passes validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedValues(FormState);

impl SubmittedValues {
    pub(crate) fn capture(state: &FormState) -> Self {
        Self(state.clone())
    }

    pub fn first_name(&self) -> &str {
        &self.0.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.0.last_name
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// The message, if one was entered.
    pub fn message(&self) -> Option<&str> {
        Some(self.0.message.as_str()).filter(|m| !m.is_empty())
    }

    /// (field, value) pairs to show, skipping an absent message.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .map(|field| (field, self.0.get(field)))
            .filter(|(field, value)| field.is_required() || !value.is_empty())
    }
}

/// Where the form is in its edit/submit cycle. There is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Editing,
    Submitted,
}
