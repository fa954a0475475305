use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use feed_cache::{BackendError, FeedBackend, FeedSnapshot, InMemoryBackend};

/// Backend double whose primitives can be made to fail on demand.
///
/// Wraps a real [`InMemoryBackend`] and injects a failure before
/// delegating, so a failed call genuinely leaves the stored state
/// untouched. Clones share both the storage and the fault flags, letting
/// a test flip faults while the store's worker owns its own handle.
#[derive(Clone)]
pub struct FaultyBackend {
    inner: InMemoryBackend,
    fail_load: Arc<AtomicBool>,
    fail_replace: Arc<AtomicBool>,
    fail_clear: Arc<AtomicBool>,
}

impl Default for FaultyBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FaultyBackend {
    pub fn new() -> Self {
        Self {
            inner: InMemoryBackend::new(),
            fail_load: Arc::new(AtomicBool::new(false)),
            fail_replace: Arc::new(AtomicBool::new(false)),
            fail_clear: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn fail_on_load(&self, fail: bool) {
        self.fail_load.store(fail, Ordering::SeqCst);
    }

    pub fn fail_on_replace(&self, fail: bool) {
        self.fail_replace.store(fail, Ordering::SeqCst);
    }

    pub fn fail_on_clear(&self, fail: bool) {
        self.fail_clear.store(fail, Ordering::SeqCst);
    }

    fn injected(primitive: &str) -> BackendError {
        BackendError::Io(format!("injected {primitive} fault"))
    }
}

impl FeedBackend for FaultyBackend {
    fn load(&self) -> Result<Option<FeedSnapshot>, BackendError> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(Self::injected("load"));
        }
        self.inner.load()
    }

    fn replace(&self, snapshot: FeedSnapshot) -> Result<(), BackendError> {
        if self.fail_replace.load(Ordering::SeqCst) {
            return Err(Self::injected("replace"));
        }
        self.inner.replace(snapshot)
    }

    fn clear(&self) -> Result<(), BackendError> {
        if self.fail_clear.load(Ordering::SeqCst) {
            return Err(Self::injected("clear"));
        }
        self.inner.clear()
    }
}
