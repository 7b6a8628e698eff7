use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Ties in-flight fetches to the lifetime of a screen. Requests are never
/// cancelled server-side; a response that settles after the screen was
/// torn down is simply discarded.
#[derive(Debug, Clone, Default)]
pub struct ScreenScope {
    retired: Arc<AtomicBool>,
}

impl ScreenScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the screen as torn down. Idempotent.
    pub fn retire(&self) {
        self.retired.store(true, Ordering::SeqCst);
    }

    pub fn is_retired(&self) -> bool {
        self.retired.load(Ordering::SeqCst)
    }

    /// Await a fetch on behalf of the screen; returns `None` when the
    /// screen was retired before the result settled.
    pub async fn run<F, T>(&self, fut: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        let value = fut.await;
        if self.is_retired() {
            debug!("discarding result for a retired screen");
            return None;
        }
        Some(value)
    }
}
