use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{BackendError, FeedBackend};
use crate::feed::FeedSnapshot;

/// Flat-file backend storing the snapshot as a single JSON document.
///
/// `replace` writes the new snapshot to a sibling temp file, syncs it to
/// disk, and renames it over the target; the rename is the atomicity
/// point, so a crash at any moment leaves either the old file or the new
/// one, never a partial snapshot. A missing file is the empty state.
#[derive(Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn scratch_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl FeedBackend for FileBackend {
    fn load(&self) -> Result<Option<FeedSnapshot>, BackendError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot = serde_json::from_slice(&bytes)?;
        Ok(Some(snapshot))
    }

    fn replace(&self, snapshot: FeedSnapshot) -> Result<(), BackendError> {
        let bytes = serde_json::to_vec(&snapshot)?;
        let scratch = self.scratch_path();
        let written = write_then_rename(&scratch, &self.path, &bytes);
        if written.is_err() {
            let _ = fs::remove_file(&scratch);
        }
        written
    }

    fn clear(&self) -> Result<(), BackendError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Sync before renaming: the rename only commits the directory entry, so
/// without the sync a power loss can leave the new name pointing at
/// unwritten (possibly zero-length) data.
fn write_then_rename(scratch: &Path, target: &Path, bytes: &[u8]) -> Result<(), BackendError> {
    let mut file = File::create(scratch)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    fs::rename(scratch, target)?;
    Ok(())
}
