//! CSV dataset loader for the record store.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::record::Record;
use crate::repository::errors::RepositoryResult;

/// Reads every record from a CSV file with a header row.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> RepositoryResult<Vec<Record>> {
    let file = File::open(path.as_ref())?;
    let records = parse_dataset(file)?;
    log::info!(
        "Loaded {} records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

/// Parses CSV rows into records, keeping the source order.
///
/// Only `id`, `age`, `first_name`, `last_name`, `gender` and `about` are
/// required; the remaining columns may be absent.
pub fn parse_dataset<R: Read>(reader: R) -> RepositoryResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

    let mut records = Vec::new();
    for row in reader.deserialize::<Record>() {
        records.push(row?);
    }

    Ok(records)
}
