//! Advisory file lock held for the lifetime of a guard.
//!
//! The marker file is created with exclusive-create semantics and holds the
//! owner token of the guard that created it. Dropping the guard removes the
//! marker, so every exit path (early return, `?`, unwind) releases it.
//!
//! The lock is cooperative: nothing stops a process that ignores the marker,
//! and a marker left behind by a crashed process must be removed by hand.

use crate::error::{Error, Result};
use crate::id;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A held advisory lock. Released on [`FileLock::release`] or on drop.
#[derive(Debug)]
pub struct FileLock {
    path: PathBuf,
    owner: String,
    held: bool,
}

impl FileLock {
    /// Create the marker at `path` and return the guard holding it.
    ///
    /// # Errors
    /// Returns [`Error::LockHeld`] if the marker already exists, or
    /// [`Error::Io`] if it cannot be created or written.
    pub fn acquire(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let owner = id::random_id8()?;

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(f) => f,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "lock marker already present");
                return Err(Error::LockHeld { path });
            }
            Err(err) => return Err(Error::io(path, err)),
        };

        if let Err(err) = writeln!(file, "{owner}").and_then(|()| file.flush()) {
            let _ = fs::remove_file(&path);
            return Err(Error::io(path, err));
        }

        let guard = Self {
            path,
            owner,
            held: true,
        };
        info!(path = %guard.path.display(), owner = %guard.owner, "acquired file lock");
        Ok(guard)
    }

    /// Remove the marker if this guard still holds it.
    ///
    /// Calling this on a released guard is a no-op. A marker that now names a
    /// different owner is left in place.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the marker exists but cannot be read or removed.
    pub fn release(&mut self) -> Result<()> {
        if !self.held {
            return Ok(());
        }
        self.held = false;

        let recorded = match fs::read_to_string(&self.path) {
            Ok(s) => s.trim_end().to_string(),
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(Error::io(self.path.clone(), err)),
        };

        if recorded != self.owner {
            warn!(
                path = %self.path.display(),
                owner = %self.owner,
                recorded = %recorded,
                "lock marker owned by someone else; leaving it"
            );
            return Ok(());
        }

        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "released file lock");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::io(self.path.clone(), err)),
        }
    }

    /// Give up responsibility for the marker without removing it.
    ///
    /// Used by the CLI, whose `lock acquire` must outlive the process.
    #[must_use]
    pub fn detach(mut self) -> (PathBuf, String) {
        self.held = false;
        (self.path.clone(), self.owner.clone())
    }

    /// Whether this guard still holds the lock.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.held
    }

    /// Path of the marker file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Owner token written into the marker.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            warn!(error = %err, "failed to release file lock on drop");
        }
    }
}

/// Run `f` while holding the lock at `path`; the lock is released before
/// this returns, whether `f` succeeds, fails, or unwinds.
///
/// # Errors
/// Returns [`Error::LockHeld`] or [`Error::Io`] if the lock cannot be taken or
/// released. Errors produced by `f` are part of its return value `T`.
pub fn with_lock<T>(path: impl AsRef<Path>, f: impl FnOnce(&FileLock) -> T) -> Result<T> {
    let mut guard = FileLock::acquire(path)?;
    let out = f(&guard);
    guard.release()?;
    Ok(out)
}

/// Remove a marker on behalf of `owner`, as the CLI does across processes.
///
/// Missing markers and markers naming another owner are left alone.
///
/// # Errors
/// Returns [`Error::Io`] if the marker cannot be read or removed.
pub fn release_owned(path: impl AsRef<Path>, owner: impl Into<String>) -> Result<()> {
    let mut guard = FileLock {
        path: path.as_ref().to_path_buf(),
        owner: owner.into(),
        held: true,
    };
    guard.release()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn marker_contains_owner_token() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.lock");
        let guard = FileLock::acquire(&path)?;
        let body = fs::read_to_string(&path)?;
        assert_eq!(body.trim_end(), guard.owner());
        assert_eq!(guard.owner().len(), 8);
        Ok(())
    }

    #[test]
    fn release_leaves_foreign_marker() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.lock");
        let mut guard = FileLock::acquire(&path)?;
        fs::write(&path, "cafebabe\n")?;
        guard.release()?;
        assert!(path.exists());
        assert!(!guard.is_held());
        Ok(())
    }

    #[test]
    fn release_tolerates_vanished_marker() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.lock");
        let mut guard = FileLock::acquire(&path)?;
        fs::remove_file(&path)?;
        guard.release()?;
        Ok(())
    }

    #[test]
    fn acquire_in_missing_dir_is_io_error() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nope").join("app.lock");
        let err = FileLock::acquire(&path).err();
        assert!(matches!(err, Some(Error::Io { .. })), "unexpected: {err:?}");
        Ok(())
    }

    #[test]
    fn detach_keeps_marker_and_release_owned_removes_it() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.lock");
        let (marker, owner) = FileLock::acquire(&path)?.detach();
        assert!(marker.exists());
        release_owned(&marker, "someone")?;
        assert!(marker.exists());
        release_owned(&marker, owner)?;
        assert!(!marker.exists());
        Ok(())
    }
}
