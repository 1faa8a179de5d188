use std::time::Duration;

use crate::core::cmd::DebounceTicket;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(350);

/// Restartable single-shot timer bookkeeping
///
/// Only the most recently scheduled ticket may fire. Scheduling again or cancelling
/// turns every earlier ticket into a no-op.
#[derive(Debug, Clone)]
pub struct DebounceState {
    delay: Duration,
    pending: Option<DebounceTicket>,
    last_ticket: u64,
}

impl Default for DebounceState {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl DebounceState {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            last_ticket: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Arm the timer, replacing whatever was pending
    pub fn schedule(&mut self) -> DebounceTicket {
        self.last_ticket += 1;
        let ticket = DebounceTicket(self.last_ticket);
        self.pending = Some(ticket);
        ticket
    }

    /// Disarm the timer; returns whether anything was pending
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Consume `ticket` if it is the armed one
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_only_latest_ticket_fires() {
        let mut debounce = DebounceState::default();
        let first = debounce.schedule();
        let second = debounce.schedule();

        assert!(!debounce.fire(first));
        assert!(debounce.is_pending());
        assert!(debounce.fire(second));
        assert!(!debounce.is_pending());
        assert!(!debounce.fire(second));
    }

    #[test]
    fn test_cancel_disarms() {
        let mut debounce = DebounceState::new(Duration::from_millis(100));
        assert_eq!(debounce.delay(), Duration::from_millis(100));
        assert!(!debounce.cancel());

        let ticket = debounce.schedule();
        assert!(debounce.cancel());
        assert!(!debounce.fire(ticket));
    }
}
