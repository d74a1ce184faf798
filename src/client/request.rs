//! Caller-facing request and response types plus pre-flight validation.

use url::form_urlencoded;

use crate::client::errors::{SearchError, SearchResult};
use crate::dto::api::User;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Parameters of a single search call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Desired page size; `0` asks for the default page.
    pub limit: i32,
    pub offset: i32,
    pub query: String,
    /// One of `id`, `age`, `name` (any case); empty sorts by name.
    pub order_field: String,
    /// `-1` descending, `0` source order, `1` ascending.
    pub order_by: i32,
}

/// One page of results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResponse {
    pub users: Vec<User>,
    pub next_page: bool,
}

/// A request that passed pre-flight validation and is ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedSearch {
    /// Page size the caller will receive, after applying the ceiling.
    pub limit: usize,
    /// Encoded query string, transmitting one row more than `limit`.
    pub query_string: String,
}

impl PreparedSearch {
    /// Rejects negative values and encodes the outgoing query string.
    ///
    /// A zero limit, or one above [`DEFAULT_ITEMS_PER_PAGE`], is replaced by
    /// [`DEFAULT_ITEMS_PER_PAGE`].
    pub fn new(req: &SearchRequest) -> SearchResult<Self> {
        if req.limit < 0 {
            return Err(SearchError::LimitInvalid);
        }
        if req.offset < 0 {
            return Err(SearchError::OffsetInvalid);
        }

        let limit = match req.limit as usize {
            0 => DEFAULT_ITEMS_PER_PAGE,
            n => n.min(DEFAULT_ITEMS_PER_PAGE),
        };

        let query_string = form_urlencoded::Serializer::new(String::new())
            .append_pair("limit", &(limit + 1).to_string())
            .append_pair("offset", &req.offset.to_string())
            .append_pair("query", &req.query)
            .append_pair("order_field", &req.order_field)
            .append_pair("order_by", &req.order_by.to_string())
            .finish();

        Ok(Self {
            limit,
            query_string,
        })
    }
}
