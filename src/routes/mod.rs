use actix_web::HttpResponse;

use crate::dto::api::SearchErrorResponse;
use crate::services::ServiceError;

pub mod search;

/// Maps a service failure onto its status code and body.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => HttpResponse::Unauthorized().finish(),
        ServiceError::BadRequest(cause) => {
            HttpResponse::BadRequest().json(SearchErrorResponse::new(cause.to_string()))
        }
        ServiceError::Unavailable(_) => HttpResponse::ServiceUnavailable().finish(),
        ServiceError::Internal(_) => HttpResponse::InternalServerError().finish(),
    }
}
