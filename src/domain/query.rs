//! Validated search parameters consumed by the query engine.
//!
//! Values of these types are only produced from a successfully validated
//! [`crate::forms::search::SearchForm`], so the engine never re-checks them.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Wire value the server reports for an unsupported `order_field`.
pub const ERROR_BAD_ORDER_FIELD: &str = "ErrorBadOrderField";

/// Reasons a search request is rejected before any records are touched.
///
/// The `Display` output is the exact text sent back in the `Error` field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryConstraintError {
    #[error("Limit must be integer")]
    LimitNotInteger,
    #[error("Offset must be integer")]
    OffsetNotInteger,
    #[error("order_by must be -1, 0 or 1")]
    OrderByOutOfRange,
    /// Carries the rejected field name for diagnostics.
    #[error("ErrorBadOrderField")]
    BadOrderField(String),
    /// The query string itself could not be decoded, e.g. a repeated key.
    #[error("{0}")]
    MalformedQuery(String),
}

/// Key used when sorting is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OrderField {
    Id,
    Age,
    #[default]
    Name,
}

impl FromStr for OrderField {
    type Err = QueryConstraintError;

    /// Case-insensitive; the empty string selects [`OrderField::Name`].
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "" | "name" => Ok(Self::Name),
            "id" => Ok(Self::Id),
            "age" => Ok(Self::Age),
            _ => Err(QueryConstraintError::BadOrderField(value.to_string())),
        }
    }
}

impl Display for OrderField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Id => "id",
            Self::Age => "age",
            Self::Name => "name",
        };
        write!(f, "{name}")
    }
}

/// Sort direction as transmitted on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OrderBy {
    Desc,
    /// Keep the source order.
    #[default]
    AsIs,
    Asc,
}

impl OrderBy {
    pub const DESC: i32 = -1;
    pub const AS_IS: i32 = 0;
    pub const ASC: i32 = 1;
}

impl TryFrom<i32> for OrderBy {
    type Error = QueryConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            OrderBy::DESC => Ok(Self::Desc),
            OrderBy::AS_IS => Ok(Self::AsIs),
            OrderBy::ASC => Ok(Self::Asc),
            _ => Err(QueryConstraintError::OrderByOutOfRange),
        }
    }
}

impl FromStr for OrderBy {
    type Err = QueryConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let raw: i32 = value
            .trim()
            .parse()
            .map_err(|_| QueryConstraintError::OrderByOutOfRange)?;
        Self::try_from(raw)
    }
}

/// Fully validated search request.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SearchQuery {
    /// Maximum number of rows to return; `0` with a zero offset disables windowing.
    pub limit: usize,
    pub offset: usize,
    /// Substring filter; empty disables filtering.
    pub query: String,
    pub order_field: OrderField,
    pub order_by: OrderBy,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn window(mut self, offset: usize, limit: usize) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }

    pub fn order(mut self, field: OrderField, by: OrderBy) -> Self {
        self.order_field = field;
        self.order_by = by;
        self
    }
}
