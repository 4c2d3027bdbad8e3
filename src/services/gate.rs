use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

impl SubmitPhase {
    pub fn is_submitting(&self) -> bool {
        *self == Self::Submitting
    }
}

type PhaseObserver = Arc<dyn Fn(SubmitPhase) + Send + Sync>;

/// Busy flag of one form: at most one submission in flight.
#[derive(Clone, Default)]
pub struct SubmitGate {
    busy: Arc<AtomicBool>,
    observer: Option<PhaseObserver>,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate that reports every phase change, e.g. to disable a submit button.
    pub fn observed(observer: impl Fn(SubmitPhase) + Send + Sync + 'static) -> Self {
        Self {
            busy: Arc::default(),
            observer: Some(Arc::new(observer)),
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        if self.busy.load(Ordering::Acquire) {
            SubmitPhase::Submitting
        } else {
            SubmitPhase::Idle
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase().is_submitting()
    }

    /// Moves Idle -> Submitting, or returns `None` if a submission is
    /// already running. The gate reopens when the ticket is dropped.
    pub fn try_begin(&self) -> Option<SubmitTicket> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        self.report(SubmitPhase::Submitting);

        Some(SubmitTicket { gate: self.clone() })
    }

    fn report(&self, phase: SubmitPhase) {
        if let Some(observer) = &self.observer {
            observer(phase);
        }
    }
}

impl std::fmt::Debug for SubmitGate {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("SubmitGate")
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

/// Held for the duration of one submission.
#[must_use = "the gate reopens as soon as the ticket is dropped"]
pub struct SubmitTicket {
    gate: SubmitGate,
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
        self.gate.report(SubmitPhase::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn second_begin_is_refused_until_ticket_drops() {
        let gate = SubmitGate::new();

        let ticket = gate.try_begin();
        assert!(ticket.is_some());
        assert!(gate.is_busy());
        assert!(gate.try_begin().is_none());

        drop(ticket);
        assert_eq!(gate.phase(), SubmitPhase::Idle);
        assert!(gate.try_begin().is_some());
    }

    #[test]
    fn clones_share_the_flag() {
        let gate = SubmitGate::new();
        let other = gate.clone();

        let _ticket = gate.try_begin().unwrap();
        assert!(other.is_busy());
        assert!(other.try_begin().is_none());
    }

    #[test]
    fn observer_sees_each_transition_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let gate = SubmitGate::observed(move |phase| sink.lock().unwrap().push(phase));

        let ticket = gate.try_begin().unwrap();
        assert!(gate.try_begin().is_none());
        drop(ticket);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![SubmitPhase::Submitting, SubmitPhase::Idle]
        );
    }
}
