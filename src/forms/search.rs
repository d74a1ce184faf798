use serde::Deserialize;

use crate::domain::query::{OrderBy, OrderField, QueryConstraintError, SearchQuery};

#[derive(Clone, Debug, Default, Deserialize)]
/// Raw query-string parameters of a search request.
///
/// Every field is kept as text so that malformed numbers can be reported
/// with a field-specific message instead of a generic extractor error.
pub struct SearchForm {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub query: Option<String>,
    pub order_field: Option<String>,
    pub order_by: Option<String>,
}

/// Empty strings are treated the same as a missing parameter.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn parse_count(
    value: &Option<String>,
    err: QueryConstraintError,
) -> Result<usize, QueryConstraintError> {
    match present(value) {
        Some(raw) => raw.parse::<usize>().map_err(|_| err),
        None => Ok(0),
    }
}

impl TryFrom<SearchForm> for SearchQuery {
    type Error = QueryConstraintError;

    /// Validates `limit`, `offset`, `order_by` and `order_field`, in that order.
    fn try_from(form: SearchForm) -> Result<Self, Self::Error> {
        let limit = parse_count(&form.limit, QueryConstraintError::LimitNotInteger)?;
        let offset = parse_count(&form.offset, QueryConstraintError::OffsetNotInteger)?;

        let order_by = match present(&form.order_by) {
            Some(raw) => raw.parse::<OrderBy>()?,
            None => OrderBy::AsIs,
        };

        let order_field = form
            .order_field
            .as_deref()
            .unwrap_or_default()
            .parse::<OrderField>()?;

        Ok(SearchQuery {
            limit,
            offset,
            query: form.query.unwrap_or_default(),
            order_field,
            order_by,
        })
    }
}
