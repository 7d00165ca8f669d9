use std::fs;
use std::io;
use std::path::Path;

use fsmeta_core::{EntryKind, EntryStat};

pub fn stat_entry(path: &Path) -> io::Result<EntryStat> {
    match fs::metadata(path) {
        Ok(meta) => Ok(entry_from_metadata(&meta)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            // Dangling symlink: present, resolves to nothing.
            match fs::symlink_metadata(path) {
                Ok(meta) if meta.file_type().is_symlink() => Ok(EntryStat {
                    kind: EntryKind::Other,
                    size: 0,
                    modified: None,
                }),
                _ => Err(err),
            }
        }
        Err(err) => Err(err),
    }
}

fn entry_from_metadata(meta: &fs::Metadata) -> EntryStat {
    let file_type = meta.file_type();
    let kind = if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };
    EntryStat {
        kind,
        size: meta.len(),
        modified: meta.modified().ok(),
    }
}
