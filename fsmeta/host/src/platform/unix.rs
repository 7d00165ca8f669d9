use std::ffi::CString;
use std::io;
use std::mem;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use fsmeta_core::{EntryKind, EntryStat};

pub fn stat_entry(path: &Path) -> io::Result<EntryStat> {
    let cstr = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains NUL"))?;
    match stat_follow(&cstr) {
        Ok(st) => Ok(entry_from_stat(&st)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            // The path may still name a symlink whose target is gone. Such
            // an entry is present but resolves to nothing, so it reports as
            // `Other` rather than absent.
            match stat_nofollow(&cstr) {
                Ok(st) if (st.st_mode & libc::S_IFMT) == libc::S_IFLNK => Ok(EntryStat {
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

fn stat_follow(path: &CString) -> io::Result<libc::stat> {
    let mut st = unsafe { mem::zeroed::<libc::stat>() };
    let res = unsafe { libc::stat(path.as_ptr(), &mut st) };
    if res < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(st)
}

fn stat_nofollow(path: &CString) -> io::Result<libc::stat> {
    let mut st = unsafe { mem::zeroed::<libc::stat>() };
    let res = unsafe { libc::lstat(path.as_ptr(), &mut st) };
    if res < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(st)
}

fn entry_from_stat(st: &libc::stat) -> EntryStat {
    let kind = match st.st_mode & libc::S_IFMT {
        libc::S_IFREG => EntryKind::File,
        libc::S_IFDIR => EntryKind::Directory,
        // Fifos, sockets, devices; symlinks only show up here via lstat.
        _ => EntryKind::Other,
    };
    EntryStat {
        kind,
        size: st.st_size as u64,
        modified: modified_time(st),
    }
}

fn modified_time(st: &libc::stat) -> Option<SystemTime> {
    let secs = u64::try_from(st.st_mtime).ok()?;
    Some(UNIX_EPOCH + Duration::new(secs, st.st_mtime_nsec as u32))
}
