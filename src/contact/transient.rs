//! Self-expiring notices shown at the top of the form

use std::time::Duration;
use tokio::time::Instant;

/// How long a notice stays on screen
pub const MESSAGE_LIFETIME: Duration = Duration::from_millis(5000);

pub const SUCCESS_TEXT: &str =
    "✓ Votre message a été envoyé avec succès ! Je vous répondrai sous 24h.";
pub const ERROR_TEXT: &str =
    "⚠ Une erreur est survenue. Veuillez réessayer ou nous contacter directement.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// A notice that removes itself once its lifetime has passed
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub kind: MessageKind,
    pub text: String,
    pub created_at: Instant,
    pub lifetime: Duration,
}

impl TransientMessage {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            created_at: Instant::now(),
            lifetime: MESSAGE_LIFETIME,
        }
    }

    pub fn success() -> Self {
        Self::new(MessageKind::Success, SUCCESS_TEXT)
    }

    pub fn error() -> Self {
        Self::new(MessageKind::Error, ERROR_TEXT)
    }

    pub fn expires_at(&self) -> Instant {
        self.created_at + self.lifetime
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}
