//! Payloads exchanged over the `/` search endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::record::Record;

/// Header carrying the static access token.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Client-facing projection of a [`Record`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub about: String,
    pub gender: String,
}

impl From<&Record> for User {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            name: record.display_name(),
            age: record.age,
            about: record.about.clone(),
            gender: record.gender.clone(),
        }
    }
}

/// Body returned with `400 Bad Request`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}

impl SearchErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
