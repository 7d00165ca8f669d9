use std::time::SystemTime;

use crate::{EntryKind, EntryStat, ProbeError};

/// The immutable result of one resolution attempt.
///
/// A snapshot is produced whole and replaced whole; it is never updated
/// field-by-field. `kind` is already folded for the public contract: a
/// probe that failed for a reason other than absence yields `Absent` with
/// the reason kept in [`failure`](MetadataSnapshot::failure).
#[derive(Clone, Debug)]
pub struct MetadataSnapshot {
    kind: EntryKind,
    size: u64,
    modified: Option<SystemTime>,
    observed_at: SystemTime,
    failure: Option<ProbeError>,
}

impl MetadataSnapshot {
    pub(crate) fn found(stat: EntryStat) -> Self {
        Self {
            kind: stat.kind,
            size: stat.size,
            modified: stat.modified,
            observed_at: SystemTime::now(),
            failure: None,
        }
    }

    pub(crate) fn absent() -> Self {
        Self {
            kind: EntryKind::Absent,
            size: 0,
            modified: None,
            observed_at: SystemTime::now(),
            failure: None,
        }
    }

    pub(crate) fn unavailable(failure: ProbeError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::absent()
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_present(&self) -> bool {
        self.kind.is_present()
    }

    /// Size in bytes; zero for absent entries.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// When this resolution attempt was made. Informational only.
    pub fn observed_at(&self) -> SystemTime {
        self.observed_at
    }

    /// The retained probe failure, if the attempt failed for a reason other
    /// than absence. The public kind is `Absent` in that case.
    pub fn failure(&self) -> Option<ProbeError> {
        self.failure
    }
}
