use actix_web::http::StatusCode;
use actix_web::{HttpRequest, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::forms::players::PlayerStatsForm;
use crate::routes::{Gateway, base_context, render_error, render_template};
use crate::services::{ServiceError, players as players_service};

#[get("/players/{player_id}")]
/// Season chart and stat table of a single player.
pub async fn show_player(
    req: HttpRequest,
    player_id: web::Path<String>,
    gateway: web::Data<Gateway>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "search");
    let retry_url = format!("/players/{}?{}", player_id, req.query_string());

    let payload = serde_html_form::from_str::<PlayerStatsForm>(req.query_string())
        .map_err(|err| err.to_string())
        .and_then(|form| form.into_payload(&player_id).map_err(|err| err.to_string()));
    let payload = match payload {
        Ok(payload) => payload,
        Err(err) => {
            log::warn!("Rejected player parameters: {err}");
            return render_error(
                &tera,
                context,
                StatusCode::BAD_REQUEST,
                &format!("잘못된 요청: {err}"),
                None,
            );
        }
    };

    match players_service::load_player_stats(gateway.get_ref(), payload).await {
        Ok(data) => {
            let mut context = context;
            context.insert("player", &data);
            render_template(&tera, "players/show.html", &context)
        }
        Err(ServiceError::NotFound) => render_error(
            &tera,
            context,
            StatusCode::NOT_FOUND,
            "선수 기록을 찾을 수 없습니다.",
            None,
        ),
        Err(err) => render_error(
            &tera,
            context,
            StatusCode::BAD_GATEWAY,
            &err.to_string(),
            Some(&retry_url),
        ),
    }
}
