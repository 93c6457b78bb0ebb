//! Trait abstraction for the submission backend to enable mocking in tests

use crate::contact::FormPayload;
use crate::error::SubmissionError;
use async_trait::async_trait;

/// Receives contact form submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver one submission. May take an unbounded amount of time; callers
    /// bound it with [`submit_with_timeout`](super::submit_with_timeout).
    async fn submit(&self, fields: &FormPayload) -> Result<(), SubmissionError>;
}
