//! Domain aggregates exposed by the search service layer.

pub mod query;
pub mod record;
