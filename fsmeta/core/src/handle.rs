use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{EntryKind, MetadataSnapshot, ProbeError, StatProvider, TargetKind};

/// A path plus a lazily resolved, cached metadata snapshot.
///
/// Construction stores the path verbatim — no normalization, no existence
/// check, no filesystem access. The first metadata read performs one stat
/// through the provider and caches the snapshot; later reads answer from
/// the cache even if the filesystem has changed since. [`refresh`] discards
/// the snapshot so the next read probes again.
///
/// Two flavors share this one type: a [`directory`]-flavored handle's
/// `exists()` is true only for a directory, a [`file`]-flavored handle's
/// only for a regular file.
///
/// [`refresh`]: EntryHandle::refresh
/// [`directory`]: EntryHandle::directory
/// [`file`]: EntryHandle::file
#[derive(Debug)]
pub struct EntryHandle {
    path: PathBuf,
    target: TargetKind,
    provider: Arc<dyn StatProvider>,
    state: RwLock<Option<Arc<MetadataSnapshot>>>,
}

impl EntryHandle {
    pub fn new(provider: Arc<dyn StatProvider>, path: impl Into<PathBuf>, target: TargetKind) -> Self {
        Self {
            path: path.into(),
            target,
            provider,
            state: RwLock::new(None),
        }
    }

    /// Handle asking "is this a directory".
    pub fn directory(provider: Arc<dyn StatProvider>, path: impl Into<PathBuf>) -> Self {
        Self::new(provider, path, TargetKind::Directory)
    }

    /// Handle asking "is this a regular file".
    pub fn file(provider: Arc<dyn StatProvider>, path: impl Into<PathBuf>) -> Self {
        Self::new(provider, path, TargetKind::File)
    }

    /// The path exactly as given at construction.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn target(&self) -> TargetKind {
        self.target
    }

    /// Whether a resolution attempt has occurred since the last refresh.
    pub fn is_resolved(&self) -> bool {
        self.state.read().is_some()
    }

    /// Whether the entry exists as the declared target kind, answered from
    /// the cached snapshot (resolving first if needed). Never fails: a
    /// denied or malformed path reports `false`.
    pub fn exists(&self) -> bool {
        self.target.matches(self.metadata().kind())
    }

    /// The resolved kind, from the same snapshot `exists()` uses.
    pub fn kind(&self) -> EntryKind {
        self.metadata().kind()
    }

    /// The cached snapshot, resolving first if no attempt has been made
    /// since the last refresh.
    pub fn metadata(&self) -> Arc<MetadataSnapshot> {
        {
            let state = self.state.read();
            if let Some(snapshot) = state.as_ref() {
                return Arc::clone(snapshot);
            }
        }

        // Stat without holding the lock; only the publish is synchronized.
        let snapshot = Arc::new(resolve(self.provider.as_ref(), &self.path));
        let mut state = self.state.write();
        match state.as_ref() {
            // Another caller published while we were statting. Its snapshot
            // is just as current; adopt it so all callers in this cycle see
            // the same one.
            Some(existing) => Arc::clone(existing),
            None => {
                *state = Some(Arc::clone(&snapshot));
                snapshot
            }
        }
    }

    /// Discard the cached snapshot. Does not probe; the next metadata read
    /// does. Never fails.
    pub fn refresh(&self) {
        *self.state.write() = None;
    }
}

fn resolve(provider: &dyn StatProvider, path: &Path) -> MetadataSnapshot {
    tracing::trace!(path = ?path, "resolving entry metadata");
    match provider.stat(path) {
        Ok(stat) => MetadataSnapshot::found(stat),
        Err(err)
            if matches!(
                err.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            MetadataSnapshot::absent()
        }
        Err(err) => {
            let failure = ProbeError::from(err);
            tracing::debug!(path = ?path, %failure, "stat failed; entry reported absent");
            MetadataSnapshot::unavailable(failure)
        }
    }
}
