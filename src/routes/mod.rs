//! HTTP adapters translating requests into service calls.

use actix_web::{HttpRequest, HttpResponse, error::InternalError, web};

use crate::dto::api::{ApiError, ApiResponse};

pub mod customer;

/// Registers the customer API routes together with extractor configuration
/// that answers malformed input with an envelope instead of plain text.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(customer::create_customer)
        .service(customer::search_customers)
        .service(customer::list_customers)
        .service(customer::delete_customer);
}

/// `400 Bad Request` carrying a validation error envelope.
pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::failure(ApiError::validation(message)))
}

fn reject<E>(err: E, req: &HttpRequest) -> actix_web::Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    log::error!(
        "Rejected request payload for {} {}: {err}",
        req.method(),
        req.path()
    );
    let response = bad_request(err.to_string());
    InternalError::from_response(err, response).into()
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| reject(err, req))
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| reject(err, req))
}
