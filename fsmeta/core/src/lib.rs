//! Cached filesystem-entry metadata.
//!
//! An [`EntryHandle`] names a path and answers existence/kind questions from
//! a snapshot taken lazily on first read. Answers stay fixed — even if the
//! filesystem changes underneath — until [`EntryHandle::refresh`] discards
//! the snapshot. The actual stat call is behind the [`StatProvider`] trait;
//! `fsmeta-host` implements it against the host filesystem.

mod error;
mod handle;
mod kind;
mod provider;
mod snapshot;

pub use error::ProbeError;
pub use handle::EntryHandle;
pub use kind::{EntryKind, TargetKind};
pub use provider::{EntryStat, StatProvider};
pub use snapshot::MetadataSnapshot;
