//! Domain error types
//!
//! Validation errors are shown inline next to their field; submission errors
//! are logged in full but only ever surfaced as a generic banner.

use std::time::Duration;
use thiserror::Error;

/// A failed field rule. The `Display` text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Le nom est obligatoire.")]
    NameRequired,
    #[error("Le nom doit contenir au moins 2 caractères.")]
    NameTooShort,
    #[error("L'email est obligatoire.")]
    EmailRequired,
    #[error("Veuillez saisir un email valide.")]
    EmailInvalid,
    #[error("Le message est obligatoire.")]
    MessageRequired,
    #[error("Le message doit contenir au moins 10 caractères.")]
    MessageTooShort,
}

/// Why a submission did not go through
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("backend rejected the submission: {0}")]
    Rejected(String),
    #[error("submission timed out after {0:?}")]
    TimedOut(Duration),
    #[error("failed to write submission to the outbox")]
    Io(#[from] std::io::Error),
    #[error("failed to encode submission")]
    Encode(#[from] serde_json::Error),
    #[error("submission task stopped before completing")]
    Aborted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::NameRequired.to_string(),
            "Le nom est obligatoire."
        );
        assert_eq!(
            ValidationError::EmailInvalid.to_string(),
            "Veuillez saisir un email valide."
        );
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "Le message doit contenir au moins 10 caractères."
        );
    }

    #[test]
    fn test_submission_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SubmissionError = io.into();
        assert!(matches!(err, SubmissionError::Io(_)));
    }

    #[test]
    fn test_timed_out_display_mentions_duration() {
        let err = SubmissionError::TimedOut(Duration::from_secs(15));
        assert!(err.to_string().contains("15s"));
    }
}
