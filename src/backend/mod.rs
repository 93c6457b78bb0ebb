//! Submission backends for the contact form

mod outbox;
mod simulated;
mod traits;

pub use outbox::{OutboxBackend, OutboxRecord, OUTBOX_ENV};
pub use simulated::SimulatedBackend;
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;

use crate::config::{BackendKind, StudioConfig};
use crate::contact::FormPayload;
use crate::error::SubmissionError;
use std::sync::Arc;
use std::time::Duration;

/// Build the backend selected in the configuration
pub fn from_config(config: &StudioConfig) -> Arc<dyn Submitter> {
    match config.backend_kind() {
        BackendKind::Simulated => Arc::new(SimulatedBackend::new(
            config.simulated_delay(),
            config.simulate_failure.unwrap_or(false),
        )),
        BackendKind::Outbox => Arc::new(OutboxBackend::new(config.outbox_path())),
    }
}

/// Run one submission, giving up after `limit`
pub async fn submit_with_timeout(
    submitter: &dyn Submitter,
    fields: &FormPayload,
    limit: Duration,
) -> Result<(), SubmissionError> {
    tokio::time::timeout(limit, submitter.submit(fields))
        .await
        .map_err(|_| SubmissionError::TimedOut(limit))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_reported() {
        let slow = SimulatedBackend::new(Duration::from_secs(60), false);

        let result = submit_with_timeout(&slow, &FormPayload::new(), Duration::from_secs(5)).await;

        assert!(matches!(result, Err(SubmissionError::TimedOut(d)) if d == Duration::from_secs(5)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_backend_passes_through() {
        let mut mock = MockSubmitter::new();
        mock.expect_submit().times(1).returning(|_| Ok(()));

        let result = submit_with_timeout(&mock, &FormPayload::new(), Duration::from_secs(5)).await;

        assert!(result.is_ok());
    }

    #[test]
    fn test_from_config_defaults_to_simulated() {
        // Only checks that construction does not panic for each kind
        let _simulated = from_config(&StudioConfig::default());
        let _outbox = from_config(&StudioConfig {
            backend: Some(BackendKind::Outbox),
            outbox_path: Some("/tmp/studio-tui-test/outbox.jsonl".into()),
            ..Default::default()
        });
    }
}
