use crate::domain::{SubjectList, TrackerError};
use std::time::Instant;

/// The single start/stop measurement in progress, if any.
///
/// Elapsed time is the difference of two instantaneous clock reads at
/// `start` and `stop`; nothing ticks in the background. At most one session
/// exists process-wide (it is owned by the application state), and once
/// started the only way out is `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSession {
    Idle,
    Running { target: usize, started_at: Instant },
}

impl TimerSession {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// Index of the subject being timed, if a session is in progress.
    pub fn target(&self) -> Option<usize> {
        match self {
            Self::Running { target, .. } => Some(*target),
            Self::Idle => None,
        }
    }

    /// Begin timing the subject at `index`, capturing the current instant.
    pub fn start(&mut self, index: usize, subjects: &SubjectList) -> Result<(), TrackerError> {
        self.start_at(index, subjects, Instant::now())
    }

    /// Stop the session, committing the elapsed time into the target
    /// subject. Returns the committed elapsed milliseconds.
    pub fn stop(&mut self, subjects: &mut SubjectList) -> Result<u64, TrackerError> {
        self.stop_at(subjects, Instant::now())
    }

    /// Elapsed milliseconds of the in-flight measurement, for display. Zero
    /// when idle. Reads the clock; commits nothing.
    pub fn running_elapsed_ms(&self) -> u64 {
        match self {
            Self::Running { started_at, .. } => {
                elapsed_ms(*started_at, Instant::now())
            }
            Self::Idle => 0,
        }
    }

    pub(crate) fn start_at(
        &mut self,
        index: usize,
        subjects: &SubjectList,
        now: Instant,
    ) -> Result<(), TrackerError> {
        if let Self::Running { target, .. } = self {
            return Err(TrackerError::precondition(format!(
                "a timing session is already running for subject {}",
                target
            )));
        }
        if index >= subjects.len() {
            return Err(TrackerError::precondition(format!(
                "no subject at index {}",
                index
            )));
        }
        *self = Self::Running {
            target: index,
            started_at: now,
        };
        Ok(())
    }

    pub(crate) fn stop_at(
        &mut self,
        subjects: &mut SubjectList,
        now: Instant,
    ) -> Result<u64, TrackerError> {
        let (target, started_at) = match self {
            Self::Running { target, started_at } => (*target, *started_at),
            Self::Idle => {
                return Err(TrackerError::precondition("no timing session is running"));
            }
        };

        let elapsed = elapsed_ms(started_at, now);
        let subject = subjects
            .subject_mut(target)
            .ok_or_else(|| TrackerError::precondition(format!("no subject at index {}", target)))?;
        subject.add_time(elapsed);
        *self = Self::Idle;
        Ok(elapsed)
    }

    /// Keep the captured target pointing at the same subject after a removal
    /// below it. The collection layer guarantees the removed index is never
    /// the target itself.
    pub(crate) fn note_removed(&mut self, removed: usize) {
        if let Self::Running { target, .. } = self {
            if removed < *target {
                *target -= 1;
            }
        }
    }
}

impl Default for TimerSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Saturating difference in milliseconds. Clock adjustments must never
/// decrement recorded time.
fn elapsed_ms(started_at: Instant, now: Instant) -> u64 {
    now.saturating_duration_since(started_at).as_millis() as u64
}
