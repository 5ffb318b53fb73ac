//! The pipeline executor.

use std::time::Instant;

use crate::observe::{QueryEvent, QueryObserver};
use crate::ops::Operator;
use crate::types::Record;

/// Advertises whether the boolean combinators ([`crate::or`]/[`crate::and`])
/// are available in this build.
pub const SUPPORTS_COMBINATORS: bool = true;

/// Run a pipeline of operators over a collection.
///
/// The caller's collection is never touched: the executor clones it up
/// front and owns the working copy for the duration of the call. Operators
/// are stable-sorted by [`Stage::rank`](crate::Stage::rank) before being
/// folded over the copy, so the result does not depend on the order the
/// caller listed them in; operators of equal rank run in call order.
///
/// An empty operator list returns the copied collection unchanged.
pub fn query(collection: &[Record], operators: &[Operator]) -> Vec<Record> {
    run(collection, operators, None)
}

/// Like [`query`], but reports [`QueryEvent`]s to `observer` as the pipeline
/// runs.
pub fn query_with_observer(
    collection: &[Record],
    operators: &[Operator],
    observer: &dyn QueryObserver,
) -> Vec<Record> {
    run(collection, operators, Some(observer))
}

fn run(
    collection: &[Record],
    operators: &[Operator],
    observer: Option<&dyn QueryObserver>,
) -> Vec<Record> {
    let started = Instant::now();
    let mut working: Vec<Record> = collection.to_vec();

    if let Some(obs) = observer {
        obs.on_event(&QueryEvent::RunStarted {
            rows: working.len(),
            operators: operators.len(),
        });
    }

    let mut ordered: Vec<&Operator> = operators.iter().collect();
    ordered.sort_by_key(|op| op.stage().rank());

    for op in ordered {
        let rows_in = working.len();
        working = op.apply(working);
        if let Some(obs) = observer {
            obs.on_event(&QueryEvent::StageApplied {
                stage: op.stage(),
                rows_in,
                rows_out: working.len(),
            });
        }
    }

    if let Some(obs) = observer {
        obs.on_event(&QueryEvent::RunFinished {
            rows: working.len(),
            elapsed: started.elapsed(),
        });
    }

    working
}
