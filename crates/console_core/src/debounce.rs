use std::time::{Duration, Instant};

/// Owned timer handle holding at most one pending deadline.
///
/// Scheduling replaces whatever was pending; nothing is queued. The caller
/// drives it cooperatively by calling [`Debouncer::poll`] from its loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    pending: Option<(Instant, T)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer, returning the payload of the cancelled deadline if any.
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> Option<T> {
        self.pending
            .replace((now + delay, payload))
            .map(|(_, previous)| previous)
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, payload)| payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Time left until the pending deadline, zero once it has passed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Fires once: returns the payload when the deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.cancel(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn fires_after_delay_exactly_once() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        debouncer.schedule(start, DELAY, 1u64);

        assert_eq!(debouncer.poll(start + Duration::from_millis(499)), None);
        assert_eq!(debouncer.poll(start + DELAY), Some(1));
        assert_eq!(debouncer.poll(start + DELAY * 2), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn reschedule_cancels_previous_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        assert_eq!(debouncer.schedule(start, DELAY, 1u64), None);
        let later = start + Duration::from_millis(300);
        assert_eq!(debouncer.schedule(later, DELAY, 2), Some(1));

        // The first deadline has passed but was replaced.
        assert_eq!(debouncer.poll(start + DELAY), None);
        assert_eq!(debouncer.poll(later + DELAY), Some(2));
    }

    #[test]
    fn cancel_clears_pending() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        debouncer.schedule(start, DELAY, "copy");
        assert_eq!(debouncer.cancel(), Some("copy"));
        assert_eq!(debouncer.poll(start + DELAY), None);
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        assert_eq!(debouncer.remaining(start), None);
        debouncer.schedule(start, DELAY, ());
        assert_eq!(debouncer.remaining(start), Some(DELAY));
        assert_eq!(debouncer.remaining(start + DELAY * 3), Some(Duration::ZERO));
    }
}
