//! Submitter that only logs what it receives

use super::traits::Submitter;
use crate::state::Submission;
use anyhow::Result;
use async_trait::async_trait;

/// Writes accepted values to the log; there is no remote endpoint yet
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSubmitter;

#[async_trait]
impl Submitter for ConsoleSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<()> {
        tracing::info!(
            email = %submission.values.email,
            password = "<redacted>",
            submitted_at = %submission.submitted_at.to_rfc3339(),
            "sign-in form submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormValues;

    fn submission() -> Submission {
        Submission::new(FormValues {
            email: "john@gmail.com".to_string(),
            password: "secret123".to_string(),
        })
    }

    #[tokio::test]
    async fn test_submit_succeeds() {
        let submitter = ConsoleSubmitter;
        assert!(submitter.submit(&submission()).await.is_ok());
    }

    #[test]
    fn test_submit_through_trait_object() {
        let submitter: Box<dyn Submitter> = Box::new(ConsoleSubmitter);
        let result = tokio_test::block_on(submitter.submit(&submission()));
        assert!(result.is_ok());
    }
}
