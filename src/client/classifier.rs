//! Maps HTTP outcomes onto [`SearchError`] or a [`SearchResponse`].
//!
//! Kept free of any transport so the precedence can be tested directly.

use crate::client::errors::{SearchError, SearchResult};
use crate::client::request::SearchResponse;
use crate::domain::query::ERROR_BAD_ORDER_FIELD;
use crate::dto::api::{SearchErrorResponse, User};

/// Classifies a failure that happened before a status code was received.
pub fn classify_transport(err: &reqwest::Error, query_string: &str) -> SearchError {
    if err.is_timeout() {
        SearchError::Timeout(query_string.to_string())
    } else {
        SearchError::TransportUnknown(err.to_string())
    }
}

/// Classifies a completed HTTP exchange.
///
/// `order_field` is echoed back in [`SearchError::BadOrderField`]; `limit` is
/// the page size the caller receives, one less than the rows requested.
pub fn classify(
    status: u16,
    body: &[u8],
    order_field: &str,
    limit: usize,
) -> SearchResult<SearchResponse> {
    match status {
        401 => Err(SearchError::Unauthorized),
        500 => Err(SearchError::ServerFatal),
        400 => Err(classify_bad_request(body, order_field)),
        200 => decode_page(body, limit),
        other => Err(SearchError::TransportUnknown(format!(
            "unexpected status {other}: {}",
            String::from_utf8_lossy(body)
        ))),
    }
}

fn classify_bad_request(body: &[u8], order_field: &str) -> SearchError {
    match serde_json::from_slice::<SearchErrorResponse>(body) {
        Err(err) => SearchError::ErrorBodyUndecodable(err.to_string()),
        Ok(resp) if resp.error == ERROR_BAD_ORDER_FIELD => {
            SearchError::BadOrderField(order_field.to_string())
        }
        Ok(resp) => SearchError::BadRequestUnknown(resp.error),
    }
}

fn decode_page(body: &[u8], limit: usize) -> SearchResult<SearchResponse> {
    let mut users: Vec<User> = serde_json::from_slice(body)
        .map_err(|err| SearchError::ResultBodyUndecodable(err.to_string()))?;

    let next_page = users.len() > limit;
    if next_page {
        users.truncate(limit);
    }

    Ok(SearchResponse { users, next_page })
}
