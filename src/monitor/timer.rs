//! Restart scheduling

use std::time::{Duration, Instant};

/// Elapsed-time counter started with the process
#[derive(Debug, Clone)]
pub struct RestartTimer {
    started: Instant,
    threshold: Duration,
}

impl RestartTimer {
    pub fn new(threshold: Duration) -> Self {
        Self::started_at(Instant::now(), threshold)
    }

    pub fn started_at(started: Instant, threshold: Duration) -> Self {
        Self { started, threshold }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    pub fn is_due(&self) -> bool {
        self.elapsed() >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_threshold_is_due_immediately() {
        let timer = RestartTimer::new(Duration::ZERO);
        assert!(timer.is_due());
    }

    #[test]
    fn test_fresh_timer_not_due() {
        let timer = RestartTimer::new(Duration::from_secs(500));
        assert!(!timer.is_due());
        assert_eq!(timer.threshold(), Duration::from_secs(500));
    }

    #[test]
    fn test_due_after_threshold() {
        let Some(started) = Instant::now().checked_sub(Duration::from_secs(600)) else {
            // Monotonic clock too close to its origin on this host
            return;
        };
        let timer = RestartTimer::started_at(started, Duration::from_secs(500));
        assert!(timer.is_due());
        assert!(timer.elapsed() >= Duration::from_secs(600));
    }
}
