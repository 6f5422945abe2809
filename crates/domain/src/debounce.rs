use chrono::{DateTime, Duration, Utc};

/// Coalesces bursts of input into a single trigger after a quiet period.
///
/// The debouncer does not own a timer. The caller arms a timer for the returned deadline and
/// calls [`Debouncer::poll`] when it expires. At most one deadline is pending at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    state: DebounceState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    Pending { deadline: DateTime<Utc> },
}

impl Debouncer {
    pub const DEFAULT_DELAY_MS: i64 = 500;

    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn state(&self) -> DebounceState {
        self.state
    }

    #[must_use]
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        match self.state {
            DebounceState::Idle => None,
            DebounceState::Pending { deadline } => Some(deadline),
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    /// Replaces any pending deadline by one a full delay after `now`.
    pub fn on_text_changed(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        let deadline = now + self.delay;
        self.state = DebounceState::Pending { deadline };
        deadline
    }

    /// Drops the pending deadline. The caller triggers immediately.
    ///
    /// Returns whether a pending deadline was superseded.
    pub fn on_submit(&mut self) -> bool {
        self.cancel()
    }

    /// Returns `true` exactly once when the pending deadline has been reached.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        match self.state {
            DebounceState::Pending { deadline } if now >= deadline => {
                self.state = DebounceState::Idle;
                true
            }
            DebounceState::Idle | DebounceState::Pending { .. } => false,
        }
    }

    pub fn cancel(&mut self) -> bool {
        let pending = self.is_pending();
        self.state = DebounceState::Idle;
        pending
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::milliseconds(Self::DEFAULT_DELAY_MS))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(Debouncer::default().delay(), Duration::milliseconds(500));
        assert_eq!(Debouncer::default().state(), DebounceState::Idle);
    }

    #[test]
    fn test_burst_fires_once_after_last_keystroke() {
        let mut debouncer = Debouncer::default();
        let mut fired = vec![];

        for t in 0..=1500 {
            if [0, 100, 200, 480].contains(&t) {
                debouncer.on_text_changed(at(t));
            }
            if debouncer.poll(at(t)) {
                fired.push(t);
            }
        }

        assert_eq!(fired, vec![980]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let mut debouncer = Debouncer::default();

        assert_eq!(debouncer.on_text_changed(at(0)), at(500));
        assert_eq!(debouncer.on_text_changed(at(300)), at(800));
        assert_eq!(debouncer.deadline(), Some(at(800)));
        assert!(!debouncer.poll(at(500)));
        assert!(!debouncer.poll(at(799)));
        assert!(debouncer.poll(at(800)));
        assert!(!debouncer.poll(at(801)));
    }

    #[test]
    fn test_submit_cancels_pending() {
        let mut debouncer = Debouncer::default();

        debouncer.on_text_changed(at(0));
        assert!(debouncer.on_submit());

        for t in 0..=2000 {
            assert!(!debouncer.poll(at(t)));
        }
    }

    #[test]
    fn test_submit_when_idle() {
        let mut debouncer = Debouncer::default();

        assert!(!debouncer.on_submit());
        assert_eq!(debouncer.state(), DebounceState::Idle);
    }

    #[rstest]
    #[case(0, 499, false)]
    #[case(0, 500, true)]
    #[case(1000, 1600, true)]
    fn test_poll(#[case] changed: i64, #[case] now: i64, #[case] expected: bool) {
        let mut debouncer = Debouncer::default();
        debouncer.on_text_changed(at(changed));
        assert_eq!(debouncer.poll(at(now)), expected);
    }

    #[test]
    fn test_custom_delay() {
        let mut debouncer = Debouncer::new(Duration::milliseconds(150));
        debouncer.on_text_changed(at(10));
        assert_eq!(debouncer.deadline(), Some(at(160)));
    }

    #[test]
    fn test_cancel() {
        let mut debouncer = Debouncer::default();
        debouncer.on_text_changed(at(0));
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        assert!(!debouncer.poll(at(600)));
    }
}
