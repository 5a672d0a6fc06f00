//! Think page driver.
//!
//! Rotates the contemplation on two timers and streams what the page should
//! show after every change.

use symmatria_core::config::ContemplationConfig;
use symmatria_core::contemplation::{Contemplation, ReflectionView};
use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at, sleep_until};
use tokio_util::sync::CancellationToken;

/// Drives a [`Contemplation`] on the configured intervals.
pub struct ContemplationService {
    config: ContemplationConfig,
}

impl ContemplationService {
    pub fn new(config: ContemplationConfig) -> Self {
        Self { config }
    }

    /// Spawns the rotation and returns the stream of views.
    ///
    /// The first view is sent immediately. The task ends when `cancel` fires
    /// or the receiver is dropped.
    pub fn start(&self, cancel: CancellationToken) -> mpsc::UnboundedReceiver<ReflectionView> {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = self.config.clone();
        tokio::spawn(async move {
            Self::run(config, tx, cancel).await;
        });
        rx
    }

    async fn run(
        config: ContemplationConfig,
        tx: mpsc::UnboundedSender<ReflectionView>,
        cancel: CancellationToken,
    ) {
        let start = Instant::now();
        let mut reflections = interval_at(
            start + config.reflection_interval(),
            config.reflection_interval(),
        );
        let mut structures = interval_at(
            start + config.structure_interval(),
            config.structure_interval(),
        );

        // The initial "contemplating" state lasts until the first reflection
        // tick has pulsed.
        let mut contemplation = Contemplation::new();
        let mut pulse_until: Option<Instant> = None;
        tracing::info!("Contemplation started");

        loop {
            if tx.send(contemplation.view()).is_err() {
                break;
            }

            let pulse = sleep_until(pulse_until.unwrap_or(start));
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = structures.tick() => {
                    contemplation.advance_structure();
                    // Each structure gets a full reflection interval.
                    reflections.reset();
                    tracing::debug!(structure = contemplation.structure().id, "Structure advanced");
                }
                _ = reflections.tick() => {
                    contemplation.advance_reflection();
                    pulse_until = Some(Instant::now() + config.thinking_pulse());
                }
                _ = pulse, if pulse_until.is_some() => {
                    contemplation.settle();
                    pulse_until = None;
                }
            }
        }
        tracing::info!("Contemplation stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_initial_thinking_lasts_until_first_reflection_settles() {
        let cancel = CancellationToken::new();
        let started = Instant::now();
        let mut rx = ContemplationService::new(ContemplationConfig::default()).start(cancel.clone());

        let first = rx.recv().await.unwrap();
        assert_eq!(first.structure_id, "finite-finite");
        assert_eq!(first.position, 1);
        assert!(first.thinking);

        let advanced = rx.recv().await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_secs(8));
        assert_eq!(advanced.position, 2);
        assert!(advanced.thinking);

        let settled = rx.recv().await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_secs(9));
        assert_eq!(settled.position, 2);
        assert!(!settled.thinking);
        cancel.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reflection_then_structure_rotation() {
        let cancel = CancellationToken::new();
        let started = Instant::now();
        let mut rx = ContemplationService::new(ContemplationConfig::default()).start(cancel.clone());

        let mut reflection_at = None;
        let structure_change = loop {
            let view = rx.recv().await.unwrap();
            if view.position == 2 && reflection_at.is_none() {
                reflection_at = Some(started.elapsed());
            }
            if view.structure_id != "finite-finite" {
                break (view, started.elapsed());
            }
        };

        assert_eq!(reflection_at, Some(Duration::from_secs(8)));
        let (view, elapsed) = structure_change;
        assert_eq!(view.structure_id, "finite-infinite");
        assert_eq!(view.position, 1);
        assert_eq!(elapsed, Duration::from_secs(15));
        cancel.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reflection_timer_restarts_with_new_structure() {
        let cancel = CancellationToken::new();
        let started = Instant::now();
        let mut rx = ContemplationService::new(ContemplationConfig::default()).start(cancel.clone());

        let next_reflection = loop {
            let view = rx.recv().await.unwrap();
            if view.structure_id == "finite-infinite" && view.position == 2 {
                break view;
            }
        };

        // Structure switched at 15 s, so its second reflection is due at 23 s.
        assert_eq!(started.elapsed(), Duration::from_secs(23));
        assert!(next_reflection.thinking);
        cancel.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_closes_stream() {
        let cancel = CancellationToken::new();
        let mut rx = ContemplationService::new(ContemplationConfig::default()).start(cancel.clone());
        rx.recv().await.unwrap();
        cancel.cancel();
        while rx.recv().await.is_some() {}
    }
}
