//! Scripted in-memory [`StatProvider`] for deterministic tests.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use fsmeta_core::{EntryKind, EntryStat, StatProvider};

const MAX_LINK_HOPS: usize = 40;

#[derive(Clone, Debug)]
enum MemEntry {
    File { size: u64 },
    Directory,
    /// Fifo/socket/device stand-in.
    Special,
    Symlink(PathBuf),
    /// Any stat against this path fails with `PermissionDenied`.
    Denied,
}

/// In-memory stat backend. Entries are a flat path map; symlinks resolve
/// through the map the way the host follows links, and a chain ending
/// nowhere reports the entry as present-but-`Other`, matching the host
/// provider's dangling-link behavior.
///
/// Every `stat` call increments a counter so tests can assert how many
/// probes a handle actually issued.
#[derive(Debug, Default)]
pub struct MemStatProvider {
    entries: RwLock<HashMap<PathBuf, MemEntry>>,
    probes: AtomicU64,
}

impl MemStatProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_file(&self, path: impl Into<PathBuf>, size: u64) {
        self.entries
            .write()
            .insert(path.into(), MemEntry::File { size });
    }

    pub fn insert_dir(&self, path: impl Into<PathBuf>) {
        self.entries.write().insert(path.into(), MemEntry::Directory);
    }

    /// A present entry that is neither a regular file nor a directory.
    pub fn insert_special(&self, path: impl Into<PathBuf>) {
        self.entries.write().insert(path.into(), MemEntry::Special);
    }

    pub fn insert_symlink(&self, path: impl Into<PathBuf>, target: impl Into<PathBuf>) {
        self.entries
            .write()
            .insert(path.into(), MemEntry::Symlink(target.into()));
    }

    /// Make any stat of `path` fail with `PermissionDenied`.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        self.entries.write().insert(path.into(), MemEntry::Denied);
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        self.entries.write().remove(path.as_ref());
    }

    /// How many stat calls have been issued against this provider.
    pub fn probe_count(&self) -> u64 {
        self.probes.load(Ordering::Relaxed)
    }
}

impl StatProvider for MemStatProvider {
    fn stat(&self, path: &Path) -> io::Result<EntryStat> {
        self.probes.fetch_add(1, Ordering::Relaxed);
        let entries = self.entries.read();
        let mut current = path.to_path_buf();
        let mut hops = 0;
        loop {
            match entries.get(&current) {
                None if hops == 0 => return Err(io::ErrorKind::NotFound.into()),
                // A link chain that ends nowhere: the original entry is
                // present but resolves to nothing.
                None => {
                    return Ok(EntryStat {
                        kind: EntryKind::Other,
                        size: 0,
                        modified: None,
                    });
                }
                Some(MemEntry::Symlink(target)) => {
                    hops += 1;
                    if hops > MAX_LINK_HOPS {
                        return Err(io::ErrorKind::Other.into());
                    }
                    current = target.clone();
                }
                Some(MemEntry::Denied) => return Err(io::ErrorKind::PermissionDenied.into()),
                Some(MemEntry::File { size }) => {
                    return Ok(EntryStat {
                        kind: EntryKind::File,
                        size: *size,
                        modified: None,
                    });
                }
                Some(MemEntry::Directory) => {
                    return Ok(EntryStat {
                        kind: EntryKind::Directory,
                        size: 0,
                        modified: None,
                    });
                }
                Some(MemEntry::Special) => {
                    return Ok(EntryStat {
                        kind: EntryKind::Other,
                        size: 0,
                        modified: None,
                    });
                }
            }
        }
    }
}
