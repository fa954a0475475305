use std::sync::{Arc, RwLock};

use super::{BackendError, FeedBackend};
use crate::feed::FeedSnapshot;

/// In-memory backend backed by `Arc<RwLock<Option<FeedSnapshot>>>`.
///
/// Clone-friendly (cloning shares the same underlying storage), which lets
/// tests keep a handle to the storage the store's worker owns. Nothing is
/// durable across processes; use [`super::FileBackend`] for that.
#[derive(Clone)]
pub struct InMemoryBackend {
    storage: Arc<RwLock<Option<FeedSnapshot>>>,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(None)),
        }
    }
}

impl FeedBackend for InMemoryBackend {
    fn load(&self) -> Result<Option<FeedSnapshot>, BackendError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| BackendError::LockPoisoned("load"))?;
        Ok(storage.clone())
    }

    fn replace(&self, snapshot: FeedSnapshot) -> Result<(), BackendError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| BackendError::LockPoisoned("replace"))?;
        *storage = Some(snapshot);
        Ok(())
    }

    fn clear(&self) -> Result<(), BackendError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| BackendError::LockPoisoned("clear"))?;
        *storage = None;
        Ok(())
    }
}
