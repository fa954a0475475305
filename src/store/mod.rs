//! The feed store: serialized, non-blocking cache operations.
//!
//! [`FeedStore`] wraps a [`FeedBackend`] behind three asynchronous
//! operations — retrieve, insert, delete. Calls never block the caller:
//! each one enqueues the operation and returns a [`Completion`] handle
//! immediately. A single worker thread owns the backend and drains the
//! queue first-in-first-out, running each operation to completion
//! (backend I/O, then completion delivery) before starting the next.
//!
//! That single-writer discipline is what turns the backend's individually
//! atomic primitives into a serial history: no two operations' effects
//! interleave, and completions arrive in the same order the operations
//! were submitted. No locks are taken around backend calls.
//!
//! ## Example
//!
//! ```
//! use std::time::SystemTime;
//! use feed_cache::{CacheState, FeedImage, FeedStore, InMemoryBackend};
//! use url::Url;
//! use uuid::Uuid;
//!
//! let store = FeedStore::new(InMemoryBackend::new());
//!
//! let image = FeedImage::new(
//!     Uuid::new_v4(),
//!     Some("sunrise".into()),
//!     None,
//!     Url::parse("https://example.com/sunrise.png").unwrap(),
//! );
//! store.insert(vec![image], SystemTime::now()).wait().unwrap();
//!
//! match store.retrieve().wait().unwrap() {
//!     CacheState::Found(snapshot) => assert_eq!(snapshot.images.len(), 1),
//!     CacheState::Empty => unreachable!(),
//! }
//! ```

mod error;

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::SystemTime;

use tracing::{debug, warn};

pub use error::{DeletionError, InsertionError, RetrievalError};

use crate::backend::FeedBackend;
use crate::feed::{CacheState, FeedImage, FeedSnapshot};

/// Pending result of a store operation.
///
/// Returned immediately by [`FeedStore::retrieve`], [`FeedStore::insert`]
/// and [`FeedStore::delete`]; the operation itself runs on the store's
/// worker. `wait` blocks until the operation has been applied.
pub struct Completion<T> {
    rx: Receiver<T>,
}

impl<T> Completion<T> {
    /// Block until the operation completes and return its result.
    pub fn wait(self) -> T {
        // The worker replies to every dequeued operation, and drop drains
        // the queue before joining, so this fails only if the worker
        // panicked — a bug, not a recoverable state.
        self.rx
            .recv()
            .expect("feed store worker terminated without replying")
    }

    /// Non-blocking check: the result, if the operation has completed.
    pub fn try_wait(&self) -> Option<T> {
        self.rx.try_recv().ok()
    }
}

enum Operation {
    Retrieve(Sender<Result<CacheState, RetrievalError>>),
    Insert {
        snapshot: FeedSnapshot,
        reply: Sender<Result<(), InsertionError>>,
    },
    Delete(Sender<Result<(), DeletionError>>),
}

/// The cache store: a stateless façade plus an operation queue.
///
/// Holds no snapshot data in memory; every operation goes to the backend,
/// through the queue. One logical store owns one backend — wrapping the
/// same physical backend in two stores requires external synchronization.
///
/// Dropping the store closes the queue; operations already submitted are
/// still applied and their completions delivered before the worker exits.
pub struct FeedStore {
    ops: Option<Sender<Operation>>,
    worker: Option<JoinHandle<()>>,
}

impl FeedStore {
    /// Create a store owning the given backend and spawn its worker.
    pub fn new<B: FeedBackend + 'static>(backend: B) -> Self {
        let (ops_tx, ops_rx) = channel();
        let worker = thread::spawn(move || run_operations(backend, ops_rx));
        FeedStore {
            ops: Some(ops_tx),
            worker: Some(worker),
        }
    }

    /// Read the cached feed: `Empty` or `Found` with images in their
    /// original insertion order and the stored timestamp. No side effects.
    pub fn retrieve(&self) -> Completion<Result<CacheState, RetrievalError>> {
        let (reply, rx) = channel();
        self.submit(Operation::Retrieve(reply));
        Completion { rx }
    }

    /// Replace the cached feed wholesale with a new snapshot.
    ///
    /// The replacement is atomic: no reader observes a mix of old and new
    /// images, or a transient empty state. On failure the backend holds
    /// exactly what it held before the call.
    pub fn insert(
        &self,
        images: Vec<FeedImage>,
        timestamp: SystemTime,
    ) -> Completion<Result<(), InsertionError>> {
        let (reply, rx) = channel();
        self.submit(Operation::Insert {
            snapshot: FeedSnapshot::new(images, timestamp),
            reply,
        });
        Completion { rx }
    }

    /// Remove the cached feed. Idempotent: an empty cache is a success.
    pub fn delete(&self) -> Completion<Result<(), DeletionError>> {
        let (reply, rx) = channel();
        self.submit(Operation::Delete(reply));
        Completion { rx }
    }

    fn submit(&self, op: Operation) {
        if let Some(ops) = &self.ops {
            // The worker only exits once this sender is dropped, so the
            // send cannot fail while the store is alive.
            let _ = ops.send(op);
        }
    }
}

impl Drop for FeedStore {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain queued operations and
        // exit; join so no operation is abandoned mid-flight.
        drop(self.ops.take());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Drain the operation queue against the backend, one operation at a time.
///
/// Iterating the receiver yields operations in submission order and ends
/// once all senders are gone and the queue is empty. Each reply is sent
/// before the next operation is dequeued, so completion order matches
/// effect order. A dropped `Completion` makes the reply send fail; the
/// operation's effect stands either way.
fn run_operations<B: FeedBackend>(backend: B, ops: Receiver<Operation>) {
    for op in ops {
        match op {
            Operation::Retrieve(reply) => {
                debug!("retrieving cached feed");
                let result = backend
                    .load()
                    .map(CacheState::from)
                    .map_err(|err| {
                        warn!(error = %err, "feed retrieval failed");
                        RetrievalError::from(err)
                    });
                let _ = reply.send(result);
            }
            Operation::Insert { snapshot, reply } => {
                debug!(images = snapshot.images.len(), "inserting feed snapshot");
                let result = backend.replace(snapshot).map_err(|err| {
                    warn!(error = %err, "feed insertion failed");
                    InsertionError::from(err)
                });
                let _ = reply.send(result);
            }
            Operation::Delete(reply) => {
                debug!("deleting cached feed");
                let result = backend.clear().map_err(|err| {
                    warn!(error = %err, "feed deletion failed");
                    DeletionError::from(err)
                });
                let _ = reply.send(result);
            }
        }
    }
}
