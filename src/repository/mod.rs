use std::sync::Arc;

use crate::{domain::record::Record, repository::errors::RepositoryResult};

pub mod dataset;
pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use memory::InMemoryRecordStore;

/// Read access to the full, source-ordered record sequence.
///
/// Implementations hand out a shared snapshot; callers copy before reordering.
pub trait RecordReader {
    fn list_records(&self) -> RepositoryResult<Arc<[Record]>>;
}
