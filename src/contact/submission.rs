//! Submission lifecycle of the contact form
//!
//! ```text
//! Idle -> Validating -> Submitting -> Succeeded -> Idle
//!              |                  \-> Failed    -> Idle
//!              \-> Idle (invalid)
//! ```
//!
//! The flow is split in two halves around the backend call so the terminal
//! front-end can keep drawing the loading state while the call is pending:
//! [`SubmissionController::begin`] validates and locks the submit control,
//! [`SubmissionController::finish`] shows the outcome and unlocks it.

use super::field::FieldName;
use super::form::{ContactForm, FormPayload, SENDING_LABEL};
use super::transient::TransientMessage;
use crate::backend::{submit_with_timeout, Submitter};
use crate::error::SubmissionError;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of the first half of a submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStart {
    /// A submission is already in flight
    Busy,
    /// Validation failed; `first_error` should receive focus
    Invalid { first_error: Option<FieldName> },
    /// The backend should now be called with this payload
    Ready(FormPayload),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed,
}

/// Everything [`SubmissionController::handle_submit`] can end with
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitReport {
    Busy,
    Invalid { first_error: Option<FieldName> },
    Completed(SubmitOutcome),
}

/// Drives the submission state machine
#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
    last_outcome: Option<SubmitOutcome>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn last_outcome(&self) -> Option<SubmitOutcome> {
        self.last_outcome
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Validate the form and, if it passes, lock the submit control and
    /// collect the payload.
    pub fn begin(&mut self, form: &mut ContactForm) -> SubmitStart {
        if self.is_submitting() || form.submit.disabled {
            tracing::debug!("submit ignored, a submission is in flight");
            return SubmitStart::Busy;
        }

        self.state = SubmissionState::Validating;
        if !form.validate_form() {
            self.state = SubmissionState::Idle;
            let first_error = form.first_errored_field();
            tracing::debug!(?first_error, "submission blocked by validation");
            return SubmitStart::Invalid { first_error };
        }

        form.submit.start_loading(SENDING_LABEL);
        self.state = SubmissionState::Submitting;
        SubmitStart::Ready(form.payload())
    }

    /// Apply the backend's answer: show the notice, reset on success, and
    /// always unlock the submit control.
    pub fn finish(
        &mut self,
        form: &mut ContactForm,
        result: Result<(), SubmissionError>,
    ) -> SubmitOutcome {
        let outcome = match result {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                tracing::info!("contact form submitted");
                form.insert_message(TransientMessage::success());
                form.reset();
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                self.state = SubmissionState::Failed;
                tracing::error!(error = %err, "contact form submission failed");
                form.insert_message(TransientMessage::error());
                SubmitOutcome::Failed
            }
        };

        form.submit.restore();
        self.state = SubmissionState::Idle;
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Run the whole flow in place, awaiting the backend for at most `limit`
    pub async fn handle_submit(
        &mut self,
        form: &mut ContactForm,
        submitter: &dyn Submitter,
        limit: Duration,
    ) -> SubmitReport {
        let payload = match self.begin(form) {
            SubmitStart::Busy => return SubmitReport::Busy,
            SubmitStart::Invalid { first_error } => return SubmitReport::Invalid { first_error },
            SubmitStart::Ready(payload) => payload,
        };

        let result = submit_with_timeout(submitter, &payload, limit).await;
        SubmitReport::Completed(self.finish(form, result))
    }
}
