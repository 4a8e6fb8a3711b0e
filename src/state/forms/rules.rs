//! Field validation rules
//!
//! Each field owns an ordered table of rules. Evaluation stops at the
//! first rule that fails and that rule's error is the one surfaced.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A single failed rule, carrying the text shown under the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is not correct")]
    EmailMalformed,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

/// Event class that causes a field to be re-validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Validate when the field loses focus
    #[default]
    OnBlur,
    /// Validate on every edit
    OnChange,
    /// Only a submit attempt writes errors
    OnSubmit,
}

/// A predicate paired with the error reported when it does not hold
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub error: ValidationError,
}

pub const EMAIL_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        error: ValidationError::EmailRequired,
    },
    Rule {
        check: is_well_formed_email,
        error: ValidationError::EmailMalformed,
    },
];

pub const PASSWORD_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        error: ValidationError::PasswordRequired,
    },
    Rule {
        check: has_min_password_length,
        error: ValidationError::PasswordTooShort,
    },
];

/// Run `rules` in order against `value`, returning the first failure
pub fn first_failure(rules: &[Rule], value: &str) -> Option<ValidationError> {
    rules
        .iter()
        .find(|rule| !(rule.check)(value))
        .map(|rule| rule.error)
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn has_min_password_length(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Accepts `local@domain.tld`: exactly one `@` with a non-empty local
/// part, and a domain containing a `.` that is neither its first nor
/// its last character.
pub fn is_well_formed_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}
