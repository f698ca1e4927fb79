//! The transformation engine: a sequential, cancellable per-element pass over
//! a [`Series`].
//!
//! This module sits "above" [`crate::series`] and provides:
//!
//! - The per-element commit-or-keep pass ([`LambdaEngine::run`])
//! - Cooperative cancellation ([`CancelToken`])
//! - Real-time metrics + observer hooks for monitoring
//!
//! The pass is strictly sequential and single-threaded; the engine assumes
//! exclusive access to the series for the duration of the call.

mod cancel;
mod observer;

use std::sync::Arc;
use std::time::Instant;

use crate::error::{SeriesError, SeriesResult};
use crate::series::Series;
use crate::types::Value;

pub use cancel::CancelToken;
pub use observer::{
    LambdaEvent, LambdaMetrics, LambdaMetricsSnapshot, LambdaObserver, StdErrLambdaObserver,
};

/// Decision returned by a transformation callback for one element.
///
/// A callback that cannot interpret the value it receives (e.g. it expected an
/// integer in a float series) returns [`LambdaOutcome::Keep`]; there is no way
/// to accidentally commit a default value after a failed narrowing.
#[derive(Debug, Clone, PartialEq)]
pub enum LambdaOutcome {
    /// Replace the element at this position with the carried value.
    Commit(Value),
    /// Leave the element at this position unchanged.
    Keep,
}

/// Outcome of a completed transformation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LambdaSummary {
    /// Number of positions visited.
    pub processed: usize,
    /// Number of positions whose value was replaced.
    pub committed: usize,
}

/// A sequential transformation engine for [`Series`].
///
/// [`Series::lambda`] constructs a default engine per call; build one directly
/// to attach an observer or keep a metrics handle across runs.
pub struct LambdaEngine {
    observer: Option<Arc<dyn LambdaObserver>>,
    metrics: Arc<LambdaMetrics>,
}

impl LambdaEngine {
    /// Create an engine with no observer attached.
    pub fn new() -> Self {
        Self {
            observer: None,
            metrics: Arc::new(LambdaMetrics::new()),
        }
    }

    /// Attach an observer for engine events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn LambdaObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to real-time engine metrics.
    pub fn metrics(&self) -> Arc<LambdaMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Run one pass over `series`, visiting positions `0..len` in ascending
    /// order.
    ///
    /// For each position the callback receives the cancellation token and a
    /// by-value snapshot of the current element, never a live reference into
    /// storage. [`LambdaOutcome::Commit`] replaces the value at that position;
    /// [`LambdaOutcome::Keep`] leaves it unchanged.
    ///
    /// The token is polled before each position. If it has been triggered the
    /// pass stops immediately with [`SeriesError::Cancelled`]: positions
    /// already visited retain their committed values, positions not yet
    /// visited hold their pre-call values. Cancellation granularity is
    /// per-element; a callback already running is never interrupted.
    ///
    /// A commit whose kind differs from the series kind aborts the pass with
    /// [`SeriesError::KindMismatch`]; earlier commits are retained and the
    /// mismatched position is left unchanged.
    pub fn run<F>(
        &self,
        series: &mut Series,
        cancel: &CancelToken,
        mut f: F,
    ) -> SeriesResult<LambdaSummary>
    where
        F: FnMut(&CancelToken, Value) -> LambdaOutcome,
    {
        let start = Instant::now();
        self.metrics.begin_run();
        self.emit(LambdaEvent::RunStarted { len: series.len() });

        // An unset kind means the series is empty; the pass is trivial.
        let Some(expected) = series.element_kind() else {
            let summary = LambdaSummary {
                processed: 0,
                committed: 0,
            };
            self.metrics.end_run(start.elapsed());
            self.emit(LambdaEvent::RunFinished {
                elapsed: start.elapsed(),
                summary,
            });
            return Ok(summary);
        };

        let len = series.len();
        let mut committed = 0usize;

        for index in 0..len {
            if cancel.is_cancelled() {
                self.metrics.end_run(start.elapsed());
                self.emit(LambdaEvent::RunCancelled { processed: index });
                return Err(SeriesError::Cancelled { processed: index });
            }

            let snapshot = series.values()[index].clone();
            match f(cancel, snapshot) {
                LambdaOutcome::Commit(value) => {
                    let found = value.kind();
                    if found != expected {
                        self.metrics.end_run(start.elapsed());
                        self.emit(LambdaEvent::RunAborted { index });
                        return Err(SeriesError::KindMismatch {
                            index,
                            expected,
                            found,
                        });
                    }
                    series.commit(index, value);
                    committed += 1;
                    self.metrics.on_element(true);
                    self.emit(LambdaEvent::ElementProcessed {
                        index,
                        committed: true,
                    });
                }
                LambdaOutcome::Keep => {
                    self.metrics.on_element(false);
                    self.emit(LambdaEvent::ElementProcessed {
                        index,
                        committed: false,
                    });
                }
            }
        }

        let summary = LambdaSummary {
            processed: len,
            committed,
        };
        self.metrics.end_run(start.elapsed());
        self.emit(LambdaEvent::RunFinished {
            elapsed: start.elapsed(),
            summary,
        });
        Ok(summary)
    }

    fn emit(&self, event: LambdaEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

impl Default for LambdaEngine {
    fn default() -> Self {
        Self::new()
    }
}
