use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::LambdaSummary;

/// Events emitted by the transformation engine.
#[derive(Debug, Clone)]
pub enum LambdaEvent {
    RunStarted { len: usize },
    ElementProcessed { index: usize, committed: bool },
    RunCancelled { processed: usize },
    RunAborted { index: usize },
    RunFinished {
        elapsed: Duration,
        summary: LambdaSummary,
    },
}

/// Observer hook for engine events.
pub trait LambdaObserver: Send + Sync {
    fn on_event(&self, event: &LambdaEvent);
}

/// A simple stderr logger for engine events.
#[derive(Debug, Default)]
pub struct StdErrLambdaObserver;

impl LambdaObserver for StdErrLambdaObserver {
    fn on_event(&self, event: &LambdaEvent) {
        eprintln!("[lambda] {event:?}");
    }
}

/// Real-time counters for transformation runs.
///
/// The engine updates these during execution; callers can snapshot them at
/// any time via [`LambdaMetrics::snapshot`].
pub struct LambdaMetrics {
    run_id: AtomicU64,
    elapsed_ns: AtomicU64,
    elements_processed: AtomicU64,
    elements_committed: AtomicU64,
}

impl LambdaMetrics {
    pub fn new() -> Self {
        Self {
            run_id: AtomicU64::new(0),
            elapsed_ns: AtomicU64::new(0),
            elements_processed: AtomicU64::new(0),
            elements_committed: AtomicU64::new(0),
        }
    }

    pub fn begin_run(&self) {
        let _ = self.run_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.elapsed_ns.store(0, Ordering::SeqCst);
        self.elements_processed.store(0, Ordering::SeqCst);
        self.elements_committed.store(0, Ordering::SeqCst);
    }

    pub fn end_run(&self, elapsed: Duration) {
        self.elapsed_ns
            .store(elapsed.as_nanos().min(u64::MAX as u128) as u64, Ordering::SeqCst);
    }

    pub fn on_element(&self, committed: bool) {
        let _ = self.elements_processed.fetch_add(1, Ordering::SeqCst);
        if committed {
            let _ = self.elements_committed.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn snapshot(&self) -> LambdaMetricsSnapshot {
        let elapsed_ns = self.elapsed_ns.load(Ordering::SeqCst);
        let elapsed = if elapsed_ns > 0 {
            Some(Duration::from_nanos(elapsed_ns))
        } else {
            None
        };

        LambdaMetricsSnapshot {
            run_id: self.run_id.load(Ordering::SeqCst),
            elapsed,
            elements_processed: self.elements_processed.load(Ordering::SeqCst),
            elements_committed: self.elements_committed.load(Ordering::SeqCst),
        }
    }
}

impl Default for LambdaMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot of [`LambdaMetrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaMetricsSnapshot {
    pub run_id: u64,
    pub elapsed: Option<Duration>,
    pub elements_processed: u64,
    pub elements_committed: u64,
}

impl fmt::Display for LambdaMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run_id={}, elements_processed={}, elements_committed={}, elapsed={:?}",
            self.run_id, self.elements_processed, self.elements_committed, self.elapsed
        )
    }
}
