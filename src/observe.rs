//! Observer hooks for pipeline execution.
//!
//! [`crate::query_with_observer`] reports one [`QueryEvent`] when a run
//! starts, one per applied operator (in effective stage order), and one when
//! the run finishes. Observers are for tracing and test instrumentation;
//! they cannot influence the result.

use std::time::Duration;

use crate::ops::Stage;

/// Events emitted while a pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    /// A pipeline run started.
    RunStarted {
        /// Rows in the (copied) input collection.
        rows: usize,
        /// Number of operators in the pipeline.
        operators: usize,
    },
    /// One operator was applied.
    StageApplied {
        stage: Stage,
        rows_in: usize,
        rows_out: usize,
    },
    /// The run finished and the result is final.
    RunFinished { rows: usize, elapsed: Duration },
}

/// Observer hook for [`QueryEvent`]s.
pub trait QueryObserver {
    fn on_event(&self, event: &QueryEvent);
}

/// Observer that writes one line per event to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl QueryObserver for StdErrObserver {
    fn on_event(&self, event: &QueryEvent) {
        match event {
            QueryEvent::RunStarted { rows, operators } => {
                eprintln!("[recordpipe] run started: rows={rows} operators={operators}");
            }
            QueryEvent::StageApplied {
                stage,
                rows_in,
                rows_out,
            } => {
                eprintln!("[recordpipe] {stage}: rows {rows_in} -> {rows_out}");
            }
            QueryEvent::RunFinished { rows, elapsed } => {
                eprintln!("[recordpipe] run finished: rows={rows} elapsed={elapsed:?}");
            }
        }
    }
}

/// Observer that collects events for later inspection (used in tests).
#[derive(Debug, Default)]
pub struct CollectingObserver {
    events: std::sync::Mutex<Vec<QueryEvent>>,
}

impl CollectingObserver {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return all events observed so far.
    pub fn take_events(&self) -> Vec<QueryEvent> {
        std::mem::take(&mut *self.events.lock().expect("observer lock poisoned"))
    }
}

impl QueryObserver for CollectingObserver {
    fn on_event(&self, event: &QueryEvent) {
        self.events
            .lock()
            .expect("observer lock poisoned")
            .push(event.clone());
    }
}
