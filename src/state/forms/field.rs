//! Form field value objects

use super::rules::{first_failure, Rule, ValidationError, EMAIL_RULES, PASSWORD_RULES};

/// The fields of the sign-in form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Email,
    Password,
}

impl FieldName {
    pub const ALL: [FieldName; 2] = [FieldName::Email, FieldName::Password];

    /// Machine name, as used in logs and serialized values
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Ordered rule table for this field
    pub fn rules(&self) -> &'static [Rule] {
        match self {
            Self::Email => EMAIL_RULES,
            Self::Password => PASSWORD_RULES,
        }
    }
}

/// A single form field: its configuration, current value and the error
/// currently on display
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    /// Secret fields are masked when rendered
    pub is_secret: bool,
    /// Error currently shown for this field; written only by validation passes
    pub error: Option<ValidationError>,
}

impl FormField {
    /// Create a new plain text field
    pub fn text(name: FieldName, label: &str, placeholder: &str) -> Self {
        Self {
            name,
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            is_secret: false,
            error: None,
        }
    }

    /// Create a new masked field
    pub fn secret(name: FieldName, label: &str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label, "")
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Evaluate this field's rules against its current value without
    /// touching the displayed error
    pub fn check(&self) -> Option<ValidationError> {
        first_failure(self.name.rules(), &self.value)
    }

    /// Re-run the rules and store the outcome as the displayed error
    pub fn revalidate(&mut self) {
        self.error = self.check();
    }

    /// Back to the empty value with no error
    pub fn reset(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Value as it should be drawn: bullets for secret fields unless revealed
    pub fn display_value(&self, reveal: bool) -> String {
        if self.is_secret && !reveal {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }
}
