//! Trait abstraction for the submission sink to enable mocking in tests

use crate::state::Submission;
use anyhow::Result;
use async_trait::async_trait;

/// Receives the values of every successful submit
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Hand over accepted values
    async fn submit(&self, submission: &Submission) -> Result<()>;
}
