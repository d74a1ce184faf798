//! Read-only record store backed by an in-memory snapshot.

use std::sync::Arc;

use crate::domain::record::Record;
use crate::repository::RecordReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};

#[derive(Clone, Debug)]
enum Snapshot {
    Ready(Arc<[Record]>),
    Unavailable(Arc<str>),
}

/// Record store populated once at startup and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct InMemoryRecordStore {
    snapshot: Snapshot,
}

impl InMemoryRecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            snapshot: Snapshot::Ready(records.into()),
        }
    }

    /// A store whose source could not be loaded; every read reports `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            snapshot: Snapshot::Unavailable(reason.into().into()),
        }
    }
}

impl From<RepositoryResult<Vec<Record>>> for InMemoryRecordStore {
    fn from(loaded: RepositoryResult<Vec<Record>>) -> Self {
        match loaded {
            Ok(records) => Self::new(records),
            Err(err) => Self::unavailable(err.to_string()),
        }
    }
}

impl RecordReader for InMemoryRecordStore {
    fn list_records(&self) -> RepositoryResult<Arc<[Record]>> {
        match &self.snapshot {
            Snapshot::Ready(records) => Ok(Arc::clone(records)),
            Snapshot::Unavailable(reason) => Err(RepositoryError::Unavailable(reason.to_string())),
        }
    }
}
