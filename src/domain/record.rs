//! Domain model for a person record loaded from the dataset.

use serde::{Deserialize, Serialize};

/// One row of the dataset. Loaded once and never mutated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Record {
    pub id: i32,
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub is_active: String,
    #[serde(default)]
    pub balance: String,
    #[serde(default)]
    pub picture: String,
    pub age: i32,
    #[serde(default)]
    pub eye_color: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub about: String,
    #[serde(default)]
    pub registered: String,
    #[serde(default)]
    pub favorite_fruit: String,
}

impl Record {
    /// Creates a record with only the searchable fields populated.
    #[must_use]
    pub fn new(
        id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: i32,
        gender: impl Into<String>,
        about: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            gender: gender.into(),
            about: about.into(),
            ..Self::default()
        }
    }

    /// Name shown to API consumers: last name, a space, then first name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Case-sensitive substring match against the display name or biography.
    pub fn matches(&self, query: &str) -> bool {
        self.display_name().contains(query) || self.about.contains(query)
    }
}
