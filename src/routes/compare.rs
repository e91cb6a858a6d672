use actix_web::http::StatusCode;
use actix_web::{HttpRequest, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::forms::compare::CompareForm;
use crate::routes::{Gateway, base_context, render_error, render_template};
use crate::services::{ServiceError, compare as compare_service};

#[get("/compare")]
/// Side by side season chart of two players.
pub async fn show_compare(
    req: HttpRequest,
    gateway: web::Data<Gateway>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "compare");

    let form = match serde_html_form::from_str::<CompareForm>(req.query_string()) {
        Ok(form) => form,
        Err(err) => {
            log::warn!("Rejected comparison parameters: {err}");
            return render_error(
                &tera,
                context,
                StatusCode::BAD_REQUEST,
                &format!("잘못된 비교 조건: {err}"),
                Some("/compare"),
            );
        }
    };

    match compare_service::load_comparison(gateway.get_ref(), form).await {
        Ok(data) => {
            let mut context = context;
            context.insert("compare", &data);
            render_template(&tera, "compare/index.html", &context)
        }
        Err(ServiceError::Form(message)) => render_error(
            &tera,
            context,
            StatusCode::BAD_REQUEST,
            &format!("잘못된 비교 조건: {message}"),
            Some("/compare"),
        ),
        Err(ServiceError::NotFound) => render_error(
            &tera,
            context,
            StatusCode::NOT_FOUND,
            "선수 기록을 찾을 수 없습니다.",
            Some("/compare"),
        ),
        Err(err) => {
            let retry_url = format!("/compare?{}", req.query_string());
            render_error(
                &tera,
                context,
                StatusCode::BAD_GATEWAY,
                &err.to_string(),
                Some(&retry_url),
            )
        }
    }
}
