/// What a resolved path turned out to be.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file. Special files (fifos, sockets, devices) are `Other`.
    File,
    /// A directory.
    Directory,
    /// Present, but neither a regular file nor a directory. This includes
    /// symlinks whose target is gone.
    Other,
    /// Nothing at the path.
    Absent,
}

impl EntryKind {
    pub fn is_present(self) -> bool {
        !matches!(self, EntryKind::Absent)
    }
}

/// The question a handle asks of its path: "is this a directory" or
/// "is this a file".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Directory,
    File,
}

impl TargetKind {
    /// Acceptance predicate for `exists()`. Each flavor accepts exactly its
    /// own kind; `Other` and `Absent` satisfy neither.
    pub fn matches(self, kind: EntryKind) -> bool {
        match self {
            TargetKind::Directory => kind == EntryKind::Directory,
            TargetKind::File => kind == EntryKind::File,
        }
    }
}
