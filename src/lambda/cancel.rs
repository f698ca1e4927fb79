use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation signal for a transformation pass.
///
/// The engine polls the token before each element and never preempts a
/// callback mid-element. Clones share the same underlying flag, so a token
/// handed to [`crate::lambda::LambdaEngine::run`] can be triggered from
/// another thread or from inside the callback itself. Already-committed
/// positions are retained across cancellation.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-triggered state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trigger cancellation. Idempotent; cannot be un-triggered.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been triggered.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
