//! Form domain layer
//!
//! Field values, the ordered validation rules and the sign-in session
//! state machine.

mod field;
mod form_state;
mod rules;
mod values;

pub use field::{FieldName, FormField};
pub use form_state::{Form, LoginForm, OverlayState, ValidationResult, SUBMIT_BUTTON_INDEX};
pub use rules::{ValidationError, ValidationMode};
pub use values::{FormValues, Submission};
