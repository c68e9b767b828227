//! Deadline-based timers owned by the controller.
//!
//! There is at most one pending timer per [`TimerKind`]: scheduling a kind
//! again replaces its deadline, which cancels the earlier trigger.

use std::collections::BTreeMap;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKind {
    /// Declined -> Idle
    DeclineReset,
    /// Give the shrunken No button back its size and label
    NoButtonRestore,
    /// Stop pulsing the Yes button
    YesPulse,
}

impl TimerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerKind::DeclineReset => "decline_reset",
            TimerKind::NoButtonRestore => "no_button_restore",
            TimerKind::YesPulse => "yes_pulse",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Timers {
    deadlines: BTreeMap<TimerKind, Instant>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `kind` for `at`, returning the deadline it replaced
    pub fn schedule(&mut self, kind: TimerKind, at: Instant) -> Option<Instant> {
        self.deadlines.insert(kind, at)
    }

    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.deadlines.remove(&kind).is_some()
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.deadlines.contains_key(&kind)
    }

    pub fn deadline(&self, kind: TimerKind) -> Option<Instant> {
        self.deadlines.get(&kind).copied()
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    /// Disarm and return every timer due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut due: Vec<(Instant, TimerKind)> = self
            .deadlines
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(kind, at)| (*at, *kind))
            .collect();
        due.sort();

        for (_, kind) in &due {
            self.deadlines.remove(kind);
        }
        due.into_iter().map(|(_, kind)| kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_due_timers_fire_once_in_deadline_order() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TimerKind::YesPulse, t0 + Duration::from_millis(1500));
        timers.schedule(TimerKind::DeclineReset, t0 + Duration::from_millis(1000));
        timers.schedule(TimerKind::NoButtonRestore, t0 + Duration::from_millis(2000));

        assert!(timers.take_due(t0).is_empty());
        assert_eq!(
            timers.take_due(t0 + Duration::from_millis(1600)),
            vec![TimerKind::DeclineReset, TimerKind::YesPulse]
        );
        assert!(timers.take_due(t0 + Duration::from_millis(1600)).is_empty());
        assert_eq!(timers.next_deadline(), Some(t0 + Duration::from_millis(2000)));
    }

    #[test]
    fn test_second_schedule_replaces_first() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        let first = t0 + Duration::from_millis(1500);
        let second = t0 + Duration::from_millis(2500);

        assert_eq!(timers.schedule(TimerKind::DeclineReset, first), None);
        assert_eq!(timers.schedule(TimerKind::DeclineReset, second), Some(first));

        // the first deadline no longer fires
        assert!(timers.take_due(first).is_empty());
        assert_eq!(timers.take_due(second), vec![TimerKind::DeclineReset]);
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TimerKind::YesPulse, t0);

        assert!(timers.cancel(TimerKind::YesPulse));
        assert!(!timers.cancel(TimerKind::YesPulse));
        assert!(!timers.is_pending(TimerKind::YesPulse));
        assert!(timers.take_due(t0 + Duration::from_secs(10)).is_empty());
    }
}
