use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use fsmeta_core::{EntryHandle, EntryKind, StatProvider};
use fsmeta_host::HostStatProvider;
use tempfile::TempDir;

fn provider() -> Arc<dyn StatProvider> {
    Arc::new(HostStatProvider::new())
}

fn dir_handle(path: impl Into<PathBuf>) -> EntryHandle {
    EntryHandle::directory(provider(), path)
}

fn file_handle(path: impl Into<PathBuf>) -> EntryHandle {
    EntryHandle::file(provider(), path)
}

#[test]
fn exists_initializes_at_first_read() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("sub");

    let handle = dir_handle(&path);
    // Created after the handle, before any read.
    fs::create_dir(&path).expect("create dir");
    assert!(handle.exists());
}

#[test]
fn exists_is_cached_until_refresh() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("sub");

    let handle = dir_handle(&path);
    assert!(!handle.exists());

    fs::create_dir(&path).expect("create dir");
    assert!(!handle.exists(), "cached answer expected");

    handle.refresh();
    assert!(handle.exists());
}

#[test]
fn deletion_is_invisible_until_refresh() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("doomed");
    fs::create_dir(&path).expect("create dir");

    let handle = dir_handle(&path);
    assert!(handle.exists());

    fs::remove_dir(&path).expect("remove dir");
    assert!(handle.exists(), "cached answer expected");

    handle.refresh();
    assert!(!handle.exists());
}

#[test]
fn flavors_are_exclusive() {
    let temp = TempDir::new().expect("temp dir");
    let dir_path = temp.path().join("dir");
    let file_path = temp.path().join("file");
    fs::create_dir(&dir_path).expect("create dir");
    fs::write(&file_path, b"contents").expect("write file");

    assert!(dir_handle(&dir_path).exists());
    assert!(!file_handle(&dir_path).exists());
    assert!(file_handle(&file_path).exists());
    assert!(!dir_handle(&file_path).exists());
}

#[test]
fn metadata_reports_size_and_kind() {
    let temp = TempDir::new().expect("temp dir");
    let file_path = temp.path().join("file");
    fs::write(&file_path, b"contents").expect("write file");

    let handle = file_handle(&file_path);
    let meta = handle.metadata();
    assert!(meta.is_present());
    assert_eq!(meta.kind(), EntryKind::File);
    assert_eq!(meta.size(), 8);
    assert!(meta.modified().is_some());
}

#[test]
fn dot_path_is_the_directory_itself() {
    let temp = TempDir::new().expect("temp dir");
    assert!(dir_handle(temp.path().join(".")).exists());
}

#[test]
fn missing_entry_is_absent_without_failure() {
    let temp = TempDir::new().expect("temp dir");
    let handle = dir_handle(temp.path().join("nope"));
    assert_eq!(handle.kind(), EntryKind::Absent);
    assert_eq!(handle.metadata().failure(), None);
}

#[test]
fn trailing_separator_follows_the_filesystem() {
    let temp = TempDir::new().expect("temp dir");
    let dir_path = temp.path().join("dir");
    let file_path = temp.path().join("file");
    fs::create_dir(&dir_path).expect("create dir");
    fs::write(&file_path, b"x").expect("write file");

    let mut slashed_dir = dir_path.into_os_string();
    slashed_dir.push(std::path::MAIN_SEPARATOR_STR);
    let mut slashed_file = file_path.into_os_string();
    slashed_file.push(std::path::MAIN_SEPARATOR_STR);

    assert!(dir_handle(PathBuf::from(slashed_dir)).exists());
    // `file/` names nothing; it reports as plain absence.
    let handle = file_handle(PathBuf::from(slashed_file));
    assert!(!handle.exists());
    assert_eq!(handle.metadata().failure(), None);
}

#[cfg(unix)]
mod unix {
    use super::*;
    use fsmeta_core::ProbeError;
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::fs::{symlink, PermissionsExt};

    #[test]
    fn symlink_reports_as_its_target() {
        let temp = TempDir::new().expect("temp dir");
        let target = temp.path().join("target");
        let link = temp.path().join("link");
        fs::create_dir(&target).expect("create dir");
        symlink(&target, &link).expect("create symlink");

        assert!(dir_handle(&target).exists());
        assert!(dir_handle(&link).exists());
        assert!(!file_handle(&link).exists());
    }

    #[test]
    fn dangling_symlink_is_observable_but_matches_no_flavor() {
        let temp = TempDir::new().expect("temp dir");
        let target = temp.path().join("target");
        let link = temp.path().join("link");
        fs::create_dir(&target).expect("create dir");
        symlink(&target, &link).expect("create symlink");

        let target_dir = dir_handle(&target);
        let link_dir = dir_handle(&link);
        assert!(target_dir.exists());
        assert!(link_dir.exists());

        fs::remove_dir(&target).expect("remove target");
        target_dir.refresh();
        link_dir.refresh();
        assert!(!target_dir.exists());
        assert!(!link_dir.exists());
        assert_eq!(target_dir.kind(), EntryKind::Absent);
        assert_eq!(link_dir.kind(), EntryKind::Other);
        assert!(!file_handle(&link).exists());
    }

    #[test]
    fn fifo_never_satisfies_a_file_handle() {
        let temp = TempDir::new().expect("temp dir");
        let fifo = temp.path().join("pipe");
        let cstr = CString::new(fifo.as_os_str().as_bytes()).expect("fifo path");
        let res = unsafe { libc::mkfifo(cstr.as_ptr(), 0o644) };
        assert_eq!(res, 0, "mkfifo failed");

        let handle = file_handle(&fifo);
        assert!(!handle.exists());
        assert!(!dir_handle(&fifo).exists());
        assert_eq!(handle.kind(), EntryKind::Other);
    }

    #[test]
    fn denied_parent_folds_to_absent_with_reason() {
        // Permission bits do not bind root.
        if unsafe { libc::geteuid() } == 0 {
            return;
        }
        let temp = TempDir::new().expect("temp dir");
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).expect("create dir");
        fs::write(locked.join("inner"), b"x").expect("write file");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
            .expect("chmod");

        let handle = file_handle(locked.join("inner"));
        assert!(!handle.exists());
        assert_eq!(
            handle.metadata().failure(),
            Some(ProbeError::PermissionDenied)
        );

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
            .expect("chmod back");
    }

    #[test]
    fn interior_nul_folds_to_absent_with_reason() {
        use std::ffi::OsStr;
        let path = PathBuf::from(OsStr::from_bytes(b"/tmp/bad\0name"));
        let handle = file_handle(path);
        assert!(!handle.exists());
        assert_eq!(handle.metadata().failure(), Some(ProbeError::InvalidPath));
    }
}

#[cfg(target_os = "linux")]
mod case_sensitive {
    use super::*;

    #[test]
    fn exact_case_only() {
        let temp = TempDir::new().expect("temp dir");
        fs::create_dir(temp.path().join("CaseDir")).expect("create dir");

        assert!(dir_handle(temp.path().join("CaseDir")).exists());
        assert!(!dir_handle(temp.path().join("casedir")).exists());
        assert!(!dir_handle(temp.path().join("CASEDIR")).exists());
    }
}
