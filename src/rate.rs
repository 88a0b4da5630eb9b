//! Minimum-interval spacing between outbound requests

use std::time::{Duration, Instant};

use tokio::time::sleep;
use tracing::debug;

/// Tracks the last admitted request on a client and spaces successive
/// admissions by a floor interval.
#[derive(Debug, Default)]
pub(crate) struct RateGate {
    last_request: Option<Instant>,
}

impl RateGate {
    pub(crate) fn new() -> Self {
        Self { last_request: None }
    }

    /// Suspend until at least `min_interval` has passed since the previous
    /// admission, then mark this request admitted.
    pub(crate) async fn admit(&mut self, min_interval: Duration) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < min_interval {
                let wait = min_interval - elapsed;
                debug!(wait_ms = wait.as_millis() as u64, "rate limiting: spacing request");
                sleep(wait).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_admission_is_immediate() {
        let mut gate = RateGate::new();
        let started = Instant::now();
        gate.admit(Duration::from_millis(200)).await;
        assert!(started.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_successive_admissions_are_spaced() {
        let mut gate = RateGate::new();
        let interval = Duration::from_millis(100);

        gate.admit(interval).await;
        let first = Instant::now();
        gate.admit(interval).await;
        let spacing = first.elapsed();

        assert!(
            spacing >= Duration::from_millis(90),
            "expected spacing of about {interval:?}, got {spacing:?}"
        );
    }

    #[tokio::test]
    async fn test_slow_caller_is_not_delayed() {
        let mut gate = RateGate::new();
        let interval = Duration::from_millis(50);

        gate.admit(interval).await;
        sleep(interval * 2).await;

        let started = Instant::now();
        gate.admit(interval).await;
        assert!(started.elapsed() < Duration::from_millis(25));
    }
}
