mod backend;
mod feed;
mod store;

pub use backend::{BackendError, FeedBackend, FileBackend, InMemoryBackend};
pub use feed::{CacheState, FeedImage, FeedSnapshot};
pub use store::{Completion, DeletionError, FeedStore, InsertionError, RetrievalError};

// Re-export the id and url types used in the data model
pub use url::Url;
pub use uuid::Uuid;
