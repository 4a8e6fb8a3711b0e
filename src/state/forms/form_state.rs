//! Sign-in form session: field values, validation state and the
//! confirmation overlay

use super::field::{FieldName, FormField};
use super::rules::{ValidationError, ValidationMode};
use super::values::FormValues;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Which of the two session states the form is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// Fields accept input
    Editing,
    /// Success overlay is on screen and swallows input until dismissed
    ConfirmationVisible,
}

/// Outcome of running every field's rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    pub fn error(&self, name: FieldName) -> Option<ValidationError> {
        match name {
            FieldName::Email => self.email,
            FieldName::Password => self.password,
        }
    }
}

/// Index of the "Sign in" button in the focus order
pub const SUBMIT_BUTTON_INDEX: usize = 2;

/// The sign-in form session
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    /// 0 = email, 1 = password, 2 = sign-in button
    pub active_field_index: usize,
    pub overlay: OverlayState,
    /// Trigger policy before the first submit attempt
    pub mode: ValidationMode,
    /// Trigger policy after a failed submit attempt
    pub revalidate_mode: ValidationMode,
    /// Failed submit attempts since the last reset
    pub submit_count: u32,
}

impl LoginForm {
    /// New session with empty values.
    ///
    /// The confirmation overlay is visible from the start; callers that
    /// want a hidden overlay at mount use [`LoginForm::with_confirmation_visible`].
    pub fn new() -> Self {
        Self {
            email: FormField::text(FieldName::Email, "E-mail", "john@gmail.com"),
            password: FormField::secret(FieldName::Password, "Password"),
            active_field_index: 0,
            overlay: OverlayState::ConfirmationVisible,
            mode: ValidationMode::OnBlur,
            revalidate_mode: ValidationMode::OnChange,
            submit_count: 0,
        }
    }

    pub fn with_confirmation_visible(mut self, visible: bool) -> Self {
        self.overlay = if visible {
            OverlayState::ConfirmationVisible
        } else {
            OverlayState::Editing
        };
        self
    }

    pub fn with_validation_modes(
        mut self,
        mode: ValidationMode,
        revalidate_mode: ValidationMode,
    ) -> Self {
        self.mode = mode;
        self.revalidate_mode = revalidate_mode;
        self
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
        }
    }

    /// Field under focus, or `None` when the button row is focused
    pub fn focused_field(&self) -> Option<FieldName> {
        match self.active_field_index {
            0 => Some(FieldName::Email),
            1 => Some(FieldName::Password),
            _ => None,
        }
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    pub fn is_confirmation_visible(&self) -> bool {
        self.overlay == OverlayState::ConfirmationVisible
    }

    /// Policy currently deciding when errors are recomputed
    pub fn active_trigger(&self) -> ValidationMode {
        if self.submit_count > 0 {
            self.revalidate_mode
        } else {
            self.mode
        }
    }

    /// Replace a field's value; re-validates it only under an on-change policy
    pub fn set_field_value(&mut self, name: FieldName, value: impl Into<String>) {
        let on_change = self.active_trigger() == ValidationMode::OnChange;
        let field = self.field_mut(name);
        field.set_text(value.into());
        if on_change {
            field.revalidate();
        }
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(name) = self.focused_field() {
            let mut value = self.field(name).as_text().to_string();
            value.push(c);
            self.set_field_value(name, value);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(name) = self.focused_field() {
            let mut value = self.field(name).as_text().to_string();
            if value.pop().is_some() {
                self.set_field_value(name, value);
            }
        }
    }

    /// The field lost focus; re-validates it only under an on-blur policy
    pub fn blur(&mut self, name: FieldName) {
        if self.active_trigger() == ValidationMode::OnBlur {
            let field = self.field_mut(name);
            field.revalidate();
            tracing::trace!(field = name.as_str(), error = ?field.error, "field blurred");
        }
    }

    /// Run every rule against the current values. Pure: displayed errors
    /// are left as they are.
    pub fn validate(&self) -> ValidationResult {
        ValidationResult {
            email: self.email.check(),
            password: self.password.check(),
        }
    }

    pub fn values(&self) -> FormValues {
        FormValues {
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
        }
    }

    /// Attempt a submit.
    ///
    /// On success the accepted values are returned, the overlay opens and
    /// the form is reset. On failure every field's error is written, focus
    /// jumps to the first invalid field and the attempt is counted, which
    /// switches to the re-validation policy.
    pub fn submit(&mut self) -> Option<FormValues> {
        let result = self.validate();
        if !result.is_valid() {
            for name in FieldName::ALL {
                self.field_mut(name).error = result.error(name);
            }
            // Moved directly: a blur here would re-run the field just written
            if let Some(index) = FieldName::ALL
                .iter()
                .position(|name| result.error(*name).is_some())
            {
                self.active_field_index = index;
            }
            self.submit_count += 1;
            return None;
        }

        let values = self.values();
        self.overlay = OverlayState::ConfirmationVisible;
        self.reset();
        Some(values)
    }

    /// Close the confirmation overlay; values and errors are untouched
    pub fn dismiss(&mut self) {
        self.overlay = OverlayState::Editing;
    }

    /// Empty values, no errors, focus back on the first field
    pub fn reset(&mut self) {
        self.email.reset();
        self.password.reset();
        self.submit_count = 0;
        self.active_field_index = 0;
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        3 // email, password, sign-in button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(SUBMIT_BUTTON_INDEX);
        if index != self.active_field_index {
            if let Some(left) = self.focused_field() {
                self.blur(left);
            }
        }
        self.active_field_index = index;
    }
}
