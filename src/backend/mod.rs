//! Durable backends: the persistence seam behind the feed store.
//!
//! A backend holds zero or one [`FeedSnapshot`] and exposes three
//! primitives — load, replace, clear — each individually atomic and
//! durable on success. Anything satisfying that contract qualifies: an
//! embedded database, a key-value store, or the flat-file adapter shipped
//! here. The store never assumes a schema.

mod file;
mod in_memory;

use std::fmt;

pub use file::FileBackend;
pub use in_memory::InMemoryBackend;

use crate::feed::FeedSnapshot;

/// Error type for backend operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// An I/O failure while reading or writing the underlying medium.
    Io(String),
    /// A snapshot could not be decoded from (or encoded for) the medium.
    Corrupt(String),
    /// An interior lock was poisoned (a thread panicked while holding it).
    LockPoisoned(&'static str),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Io(msg) => write!(f, "backend io error: {}", msg),
            BackendError::Corrupt(msg) => write!(f, "backend data corrupt: {}", msg),
            BackendError::LockPoisoned(operation) => {
                write!(f, "backend lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for BackendError {}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        BackendError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Corrupt(err.to_string())
    }
}

/// Trait for durable snapshot storage. Holds zero or one snapshot.
///
/// Each method is individually atomic: a failed `replace` or `clear` leaves
/// the previously stored snapshot (if any) intact, and a reader never
/// observes a partially written snapshot. Serializing *sequences* of calls
/// is the store's job, not the backend's.
pub trait FeedBackend: Send + Sync {
    /// Load the currently stored snapshot, if any.
    fn load(&self) -> Result<Option<FeedSnapshot>, BackendError>;

    /// Atomically replace whatever is stored with the given snapshot.
    fn replace(&self, snapshot: FeedSnapshot) -> Result<(), BackendError>;

    /// Atomically remove the stored snapshot. Succeeds if none exists.
    fn clear(&self) -> Result<(), BackendError>;
}
