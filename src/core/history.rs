//! Mode transition history.
//!
//! Records every successful change between [`Mode::Operation`] and
//! [`Mode::Administering`] so an operator can audit when the machine was
//! opened for servicing.

use super::mode::Mode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single mode change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeTransition {
    /// The mode being left
    pub from: Mode,
    /// The mode being entered
    pub to: Mode,
    /// When the change occurred
    pub timestamp: DateTime<Utc>,
}

/// Most recent transitions kept by a [`ModeHistory`].
pub const MAX_TRANSITIONS: usize = 256;

/// Ordered history of mode changes.
///
/// Only the latest [`MAX_TRANSITIONS`] transitions are kept; older ones are
/// dropped as new ones arrive. The admin session count covers every
/// transition ever recorded.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::{Mode, ModeHistory, ModeTransition};
/// use chrono::Utc;
///
/// let history = ModeHistory::new().record(ModeTransition {
///     from: Mode::Operation,
///     to: Mode::Administering,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&Mode::Operation, &Mode::Administering]);
/// assert_eq!(history.admin_sessions(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeHistory {
    transitions: Vec<ModeTransition>,
    #[serde(default)]
    admin_sessions: usize,
}

impl ModeHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            admin_sessions: 0,
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: ModeTransition) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Record a transition in place, dropping the oldest one when full.
    pub fn push(&mut self, transition: ModeTransition) {
        if transition.to == Mode::Administering {
            self.admin_sessions += 1;
        }
        if self.transitions.len() == MAX_TRANSITIONS {
            self.transitions.remove(0);
        }
        self.transitions.push(transition);
    }

    /// Get the path of modes traversed.
    ///
    /// Returns the first transition's `from` mode, then the `to` mode of
    /// each transition. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&Mode> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Number of times the machine entered [`Mode::Administering`].
    pub fn admin_sessions(&self) -> usize {
        self.admin_sessions
    }

    /// Duration from first to last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[ModeTransition] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: Mode, to: Mode, timestamp: DateTime<Utc>) -> ModeTransition {
        ModeTransition {
            from,
            to,
            timestamp,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = ModeHistory::new();
        assert!(history.transitions().is_empty());
        assert!(history.get_path().is_empty());
        assert_eq!(history.admin_sessions(), 0);
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_does_not_mutate_original() {
        let history = ModeHistory::new();
        let new_history = history.record(transition(
            Mode::Operation,
            Mode::Administering,
            Utc::now(),
        ));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn path_and_sessions_follow_transitions() {
        let now = Utc::now();
        let history = ModeHistory::new()
            .record(transition(Mode::Operation, Mode::Administering, now))
            .record(transition(Mode::Administering, Mode::Operation, now))
            .record(transition(Mode::Operation, Mode::Administering, now));

        assert_eq!(
            history.get_path(),
            vec![
                &Mode::Operation,
                &Mode::Administering,
                &Mode::Operation,
                &Mode::Administering
            ]
        );
        assert_eq!(history.admin_sessions(), 2);
    }

    #[test]
    fn push_matches_record() {
        let t = transition(Mode::Operation, Mode::Administering, Utc::now());
        let mut pushed = ModeHistory::new();
        pushed.push(t.clone());
        assert_eq!(pushed, ModeHistory::new().record(t));
    }

    #[test]
    fn history_is_bounded_but_counts_every_session() {
        let start = Utc::now();
        let mut history = ModeHistory::new();
        for i in 0..MAX_TRANSITIONS + 10 {
            let (from, to) = if i % 2 == 0 {
                (Mode::Operation, Mode::Administering)
            } else {
                (Mode::Administering, Mode::Operation)
            };
            history.push(transition(
                from,
                to,
                start + chrono::Duration::seconds(i as i64),
            ));
        }

        assert_eq!(history.transitions().len(), MAX_TRANSITIONS);
        assert_eq!(history.admin_sessions(), (MAX_TRANSITIONS + 10) / 2);
        assert_eq!(
            history.transitions()[0].timestamp,
            start + chrono::Duration::seconds(10)
        );
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let end = start + chrono::Duration::seconds(90);
        let history = ModeHistory::new()
            .record(transition(Mode::Operation, Mode::Administering, start))
            .record(transition(Mode::Administering, Mode::Operation, end));

        assert_eq!(history.duration(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn history_roundtrips_through_json() {
        let history = ModeHistory::new().record(transition(
            Mode::Operation,
            Mode::Administering,
            Utc::now(),
        ));
        let json = serde_json::to_string(&history).unwrap();
        let deserialized: ModeHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
