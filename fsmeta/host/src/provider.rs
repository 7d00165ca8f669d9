use std::io;
use std::path::Path;

use fsmeta_core::{EntryStat, StatProvider};

use crate::platform;

/// [`StatProvider`] backed by the host filesystem.
///
/// Follows symbolic links; case sensitivity and trailing-separator handling
/// are whatever the underlying filesystem does. Stateless — one instance
/// can serve any number of handles.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostStatProvider;

impl HostStatProvider {
    pub fn new() -> Self {
        Self
    }
}

impl StatProvider for HostStatProvider {
    fn stat(&self, path: &Path) -> io::Result<EntryStat> {
        platform::stat_entry(path)
    }
}
