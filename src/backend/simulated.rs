//! Stand-in backend that waits, logs the submission and answers

use super::Submitter;
use crate::contact::FormPayload;
use crate::error::SubmissionError;
use async_trait::async_trait;
use std::time::Duration;

/// Backend that only logs what it receives
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
    fail: bool,
}

impl SimulatedBackend {
    /// Default round-trip delay
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new(delay: Duration, fail: bool) -> Self {
        Self { delay, fail }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY, false)
    }
}

#[async_trait]
impl Submitter for SimulatedBackend {
    async fn submit(&self, fields: &FormPayload) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(SubmissionError::Rejected("simulated failure".to_string()));
        }
        tracing::info!(?fields, "simulated submission received");
        Ok(())
    }
}
