//! Form definitions backing the search routes.

pub mod search;
