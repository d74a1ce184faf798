//! Mock repository implementations for isolating services in tests.

use std::sync::Arc;

use mockall::mock;

use crate::domain::record::Record;
use crate::repository::RecordReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl RecordReader for Repository {
        fn list_records(&self) -> RepositoryResult<Arc<[Record]>>;
    }
}
