//! Submitted form values

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Snapshot of the sign-in form at submit time
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub email: String,
    pub password: String,
}

// Keeps the password out of logs and panic messages.
impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Values accepted by a successful submit, stamped with the time of submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub values: FormValues,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(values: FormValues) -> Self {
        Self {
            values,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let values = FormValues {
            email: "john@gmail.com".to_string(),
            password: "secret123".to_string(),
        };
        let debug_str = format!("{:?}", values);
        assert!(debug_str.contains("john@gmail.com"));
        assert!(!debug_str.contains("secret123"));
        assert!(debug_str.contains("<redacted>"));
    }

    #[test]
    fn test_default_is_empty() {
        let values = FormValues::default();
        assert!(values.email.is_empty());
        assert!(values.password.is_empty());
    }

    #[test]
    fn test_submission_serializes_values_and_timestamp() {
        let submission = Submission::new(FormValues {
            email: "john@gmail.com".to_string(),
            password: "secret123".to_string(),
        });
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["values"]["email"], "john@gmail.com");
        assert!(json["submitted_at"].is_string());
    }

    #[test]
    fn test_values_serialize_as_flat_object() {
        let values = FormValues {
            email: "john@gmail.com".to_string(),
            password: "secret123".to_string(),
        };
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "john@gmail.com", "password": "secret123"})
        );
    }
}
