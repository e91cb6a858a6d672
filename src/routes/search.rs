use actix_web::http::StatusCode;
use actix_web::{HttpRequest, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::forms::search::{SearchForm, SearchPayload};
use crate::routes::{Gateway, base_context, render_error, render_template};
use crate::services::search as search_service;

#[get("/search")]
/// Player search with filters and numbered pages.
pub async fn show_search(
    req: HttpRequest,
    gateway: web::Data<Gateway>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "search");

    let payload = serde_html_form::from_str::<SearchForm>(req.query_string())
        .map_err(|err| err.to_string())
        .and_then(|form| SearchPayload::try_from(form).map_err(|err| err.to_string()));
    let payload = match payload {
        Ok(payload) => payload,
        Err(err) => {
            log::warn!("Rejected search parameters: {err}");
            return render_error(
                &tera,
                context,
                StatusCode::BAD_REQUEST,
                &format!("잘못된 검색 조건: {err}"),
                Some("/search"),
            );
        }
    };

    let mut controller = search_service::controller_for(payload);
    match search_service::load_search_page(gateway.get_ref(), &mut controller).await {
        Ok(data) => {
            let mut context = context;
            context.insert("retry_url", &format!("/search?{}", req.query_string()));
            context.insert("search", &data);
            render_template(&tera, "search/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load search page: {err}");
            render_error(
                &tera,
                context,
                StatusCode::BAD_GATEWAY,
                &err.to_string(),
                Some("/search"),
            )
        }
    }
}
