use std::fmt;

use crate::backend::BackendError;

/// Error delivered by a failed `retrieve`. The backend was not modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalError(BackendError);

/// Error delivered by a failed `insert`. The backend holds exactly what it
/// held before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionError(BackendError);

/// Error delivered by a failed `delete`. The stored snapshot, if any, is
/// still in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionError(BackendError);

impl RetrievalError {
    /// The underlying backend failure.
    pub fn cause(&self) -> &BackendError {
        &self.0
    }
}

impl InsertionError {
    /// The underlying backend failure.
    pub fn cause(&self) -> &BackendError {
        &self.0
    }
}

impl DeletionError {
    /// The underlying backend failure.
    pub fn cause(&self) -> &BackendError {
        &self.0
    }
}

impl fmt::Display for RetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feed retrieval failed: {}", self.0)
    }
}

impl fmt::Display for InsertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feed insertion failed: {}", self.0)
    }
}

impl fmt::Display for DeletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feed deletion failed: {}", self.0)
    }
}

impl std::error::Error for RetrievalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl std::error::Error for InsertionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl std::error::Error for DeletionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<BackendError> for RetrievalError {
    fn from(err: BackendError) -> Self {
        RetrievalError(err)
    }
}

impl From<BackendError> for InsertionError {
    fn from(err: BackendError) -> Self {
        InsertionError(err)
    }
}

impl From<BackendError> for DeletionError {
    fn from(err: BackendError) -> Self {
        DeletionError(err)
    }
}
