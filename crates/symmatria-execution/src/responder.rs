//! Canned reply producer with artificial latency.

use std::time::Duration;

use async_trait::async_trait;
use symmatria_core::config::SessionConfig;
use symmatria_core::domain::{Reply, compose_reply};
use symmatria_core::session::{PendingSubmission, Responder};

/// Answers every submission from the domain templates after a fixed delay.
///
/// The delay stands in for inference; it cannot fail and is never cut short.
pub struct DelayedResponder {
    delay: Duration,
}

impl DelayedResponder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.response_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Responder for DelayedResponder {
    async fn respond(&self, submission: &PendingSubmission) -> Reply {
        tracing::debug!(
            domain = %submission.domain,
            delay_ms = self.delay.as_millis() as u64,
            "Composing reply"
        );
        tokio::time::sleep(self.delay).await;
        compose_reply(submission.domain, &submission.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symmatria_core::domain::Domain;
    use tokio::time::Instant;

    fn submission(domain: Domain, text: &str) -> PendingSubmission {
        PendingSubmission {
            text: text.to_string(),
            domain,
            submitted_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let responder = DelayedResponder::from_config(&SessionConfig::default());
        let started = Instant::now();

        let reply = responder
            .respond(&submission(Domain::NumberTheory, "primes"))
            .await;

        assert_eq!(started.elapsed(), Duration::from_millis(2000));
        assert_eq!(reply, compose_reply(Domain::NumberTheory, "primes"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_uses_captured_domain() {
        let responder = DelayedResponder::new(Duration::ZERO);
        let reply = responder
            .respond(&submission(Domain::AlgebraicGeometry, "curves"))
            .await;
        assert!(reply.response.contains("geometric intuition about \"curves\""));
        assert!(reply.insights[2].ends_with("algebraic-geometry"));
    }
}
