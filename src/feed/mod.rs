//! The cached feed data model.
//!
//! A feed is cached as a single [`FeedSnapshot`]: an ordered list of
//! [`FeedImage`] records plus the instant the feed was fetched. Snapshots
//! are immutable values — a new one is always constructed wholesale and
//! replaces the previous one, never mutated in place.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// A single image record in the cached feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedImage {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

impl FeedImage {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        url: Url,
    ) -> Self {
        FeedImage {
            id,
            description,
            location,
            url,
        }
    }
}

/// The single persisted record: an ordered list of images plus a timestamp.
///
/// Image order is meaningful and round-trips through storage unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub images: Vec<FeedImage>,
    pub timestamp: SystemTime,
}

impl FeedSnapshot {
    pub fn new(images: Vec<FeedImage>, timestamp: SystemTime) -> Self {
        FeedSnapshot { images, timestamp }
    }
}

/// Result of retrieving the cache: absence is a valid state, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheState {
    Empty,
    Found(FeedSnapshot),
}

impl CacheState {
    /// The snapshot, if one was found.
    pub fn snapshot(&self) -> Option<&FeedSnapshot> {
        match self {
            CacheState::Empty => None,
            CacheState::Found(snapshot) => Some(snapshot),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CacheState::Empty)
    }
}

impl From<Option<FeedSnapshot>> for CacheState {
    fn from(value: Option<FeedSnapshot>) -> Self {
        match value {
            Some(snapshot) => CacheState::Found(snapshot),
            None => CacheState::Empty,
        }
    }
}
