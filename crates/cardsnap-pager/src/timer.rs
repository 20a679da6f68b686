//! One-shot settle timer driven by host frame ticks.

use std::time::Duration;

/// Cancellable one-shot deadline, polled on the UI thread.
///
/// The timer never calls back on its own: the owner asks
/// [`fire_if_due`](Self::fire_if_due) on each frame, and the deadline is
/// consumed the first time it is reached. Cancelling simply forgets it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SettleTimer {
    deadline_nanos: Option<u64>,
}

impl SettleTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer `delay` after `now_nanos`, replacing any earlier deadline.
    ///
    /// Returns `true` when an armed deadline was replaced.
    pub fn schedule(&mut self, now_nanos: u64, delay: Duration) -> bool {
        let delay_nanos = u64::try_from(delay.as_nanos()).unwrap_or(u64::MAX);
        self.deadline_nanos
            .replace(now_nanos.saturating_add(delay_nanos))
            .is_some()
    }

    /// Disarms the timer. Returns `true` when a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline_nanos.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_nanos.is_some()
    }

    pub fn deadline_nanos(&self) -> Option<u64> {
        self.deadline_nanos
    }

    /// Consumes the deadline once `now_nanos` has reached it.
    pub fn fire_if_due(&mut self, now_nanos: u64) -> bool {
        match self.deadline_nanos {
            Some(deadline) if now_nanos >= deadline => {
                self.deadline_nanos = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let mut timer = SettleTimer::new();
        assert!(!timer.schedule(1_000, Duration::from_nanos(500)));
        assert_eq!(timer.deadline_nanos(), Some(1_500));

        assert!(!timer.fire_if_due(1_499));
        assert!(timer.fire_if_due(1_500));
        assert!(!timer.fire_if_due(2_000));
        assert!(!timer.is_pending());
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut timer = SettleTimer::new();
        timer.schedule(0, Duration::from_millis(50));
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(!timer.fire_if_due(u64::MAX));
    }

    #[test]
    fn rescheduling_replaces_the_deadline() {
        let mut timer = SettleTimer::new();
        timer.schedule(0, Duration::from_millis(50));
        assert!(timer.schedule(10_000_000, Duration::from_millis(50)));
        assert!(!timer.fire_if_due(50_000_000));
        assert!(timer.fire_if_due(60_000_000));
    }

    #[test]
    fn deadline_saturates() {
        let mut timer = SettleTimer::new();
        timer.schedule(u64::MAX - 1, Duration::from_secs(1));
        assert_eq!(timer.deadline_nanos(), Some(u64::MAX));
    }
}
