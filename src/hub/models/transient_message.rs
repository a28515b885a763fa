//! # Transient Messages
//!
//! UI text shown for a fixed window and then cleared. A message carries its
//! own deadline, so replacing the message also replaces the pending clear.

use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    text: String,
    expires_at: Instant,
}

impl TransientMessage {
    pub fn new(text: impl Into<String>, shown_for: Duration) -> Self {
        Self::starting_at(text, Instant::now(), shown_for)
    }

    pub fn starting_at(text: impl Into<String>, now: Instant, shown_for: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: now + shown_for,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_should_expire_after_its_window() {
        let now = Instant::now();
        let message = TransientMessage::starting_at("boom", now, Duration::from_secs(3));
        assert_eq!(message.text(), "boom");
        assert!(!message.is_expired(now));
        assert!(!message.is_expired(now + Duration::from_millis(2999)));
        assert!(message.is_expired(now + Duration::from_secs(3)));
    }
}
