use std::fmt;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use crate::EntryKind;

/// Result of one raw stat call for a present entry.
#[derive(Copy, Clone, Debug)]
pub struct EntryStat {
    /// Never `Absent`; absence is `Err(NotFound)` from [`StatProvider::stat`].
    pub kind: EntryKind,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// The single OS-facing collaborator: stat a path, following symbolic links.
///
/// Implementations differ per platform (and `fsmeta-mem` scripts one for
/// tests); everything above this trait is platform-neutral.
pub trait StatProvider: fmt::Debug + Send + Sync {
    /// `Err(NotFound)` means nothing is reachable at the path. A symlink
    /// whose target is gone is not absent — implementations report it as a
    /// present [`EntryKind::Other`] entry.
    fn stat(&self, path: &Path) -> io::Result<EntryStat>;
}
