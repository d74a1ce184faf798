use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::domain::query::QueryConstraintError;
use crate::dto::api::ACCESS_TOKEN_HEADER;
use crate::forms::search::SearchForm;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRecordStore;
use crate::routes::service_error_response;
use crate::services::{ServiceError, search as search_service};

/// Search endpoint. The query string is decoded only after the token is accepted.
#[get("/")]
pub async fn search_users(
    req: HttpRequest,
    repo: web::Data<InMemoryRecordStore>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let token = req
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    if let Err(err) = search_service::authorize(token, &server_config.access_token) {
        return service_error_response(&err);
    }

    let form = match web::Query::<SearchForm>::from_query(req.query_string()) {
        Ok(params) => params.into_inner(),
        Err(err) => {
            log::warn!("Malformed search query {:?}: {err}", req.query_string());
            let err = ServiceError::from(QueryConstraintError::MalformedQuery(err.to_string()));
            return service_error_response(&err);
        }
    };

    let users = match search_service::search_records(repo.get_ref(), form) {
        Ok(users) => users,
        Err(err) => {
            log::debug!("Search request failed: {err}");
            return service_error_response(&err);
        }
    };

    match serde_json::to_vec(&users).map_err(ServiceError::from) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body),
        Err(err) => {
            log::error!("{err}");
            service_error_response(&err)
        }
    }
}
