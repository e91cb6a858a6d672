use actix_web::http::StatusCode;
use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::routes::{Gateway, base_context, render_error, render_template};
use crate::services::main as main_service;

#[get("/")]
/// Landing page with the backend's aggregate counts.
pub async fn show_index(
    gateway: web::Data<Gateway>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "index");

    match main_service::load_home(gateway.get_ref()).await {
        Ok(data) => {
            context.insert("home", &data);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => render_error(
            &tera,
            context,
            StatusCode::BAD_GATEWAY,
            &format!("백엔드 서버 연결 실패: {err}"),
            Some("/"),
        ),
    }
}
