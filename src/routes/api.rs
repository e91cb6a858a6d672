use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde_json::json;

use crate::forms::search::SearchForm;
use crate::gateway::errors::GatewayError;
use crate::routes::Gateway;
use crate::services::{ServiceError, api as api_service};

#[get("/v1/search")]
/// JSON player search mirroring the search page parameters.
pub async fn api_v1_search(req: HttpRequest, gateway: web::Data<Gateway>) -> impl Responder {
    let form = match serde_html_form::from_str::<SearchForm>(req.query_string()) {
        Ok(form) => form,
        Err(err) => {
            return HttpResponse::BadRequest().json(json!({ "detail": err.to_string() }));
        }
    };

    match api_service::search_api(gateway.get_ref(), form).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Form(message) | ServiceError::TypeConstraint(message)) => {
            HttpResponse::BadRequest().json(json!({ "detail": message }))
        }
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(json!({ "detail": "not found" }))
        }
        Err(ServiceError::Gateway(GatewayError::Timeout(message))) => {
            log::error!("Search timed out: {message}");
            HttpResponse::GatewayTimeout().json(json!({ "detail": message }))
        }
        Err(err) => {
            log::error!("Failed to search players: {err}");
            HttpResponse::BadGateway().json(json!({ "detail": err.to_string() }))
        }
    }
}
