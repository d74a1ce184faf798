use thiserror::Error;

/// Every way a [`crate::client::SearchClient::find_users`] call can fail.
///
/// The `Display` text of each variant is part of the client contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("limit must be > 0")]
    LimitInvalid,

    #[error("offset must be > 0")]
    OffsetInvalid,

    /// Carries the exact query string that was sent.
    #[error("timeout for {0}")]
    Timeout(String),

    #[error("unknown error {0}")]
    TransportUnknown(String),

    #[error("Bad AccessToken")]
    Unauthorized,

    #[error("SearchServer fatal error")]
    ServerFatal,

    /// Carries the order field the caller asked for.
    #[error("OrderFeld {0} invalid")]
    BadOrderField(String),

    #[error("unknown bad request error: {0}")]
    BadRequestUnknown(String),

    #[error("cant unpack error json: {0}")]
    ErrorBodyUndecodable(String),

    #[error("cant unpack result json: {0}")]
    ResultBodyUndecodable(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
