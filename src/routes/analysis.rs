use actix_web::http::StatusCode;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::analysis::AnalysisForm;
use crate::routes::{Gateway, base_context, redirect, render_error, render_template};
use crate::services::{ServiceError, analysis as analysis_service};

#[get("/analysis")]
/// Analysis request form with player name suggestions.
pub async fn show_analysis_form(
    gateway: web::Data<Gateway>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "analysis");
    let data = analysis_service::load_analysis_form(gateway.get_ref()).await;
    context.insert("suggestions", &data);
    render_template(&tera, "analysis/index.html", &context)
}

#[post("/analysis")]
/// Requests a new analysis and renders it.
pub async fn request_analysis(
    gateway: web::Data<Gateway>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    form: web::Form<AnalysisForm>,
) -> impl Responder {
    match analysis_service::request_analysis(gateway.get_ref(), form.into_inner()).await {
        Ok(view) => {
            let mut context = base_context(&flash_messages, "analysis");
            context.insert("analysis", &view);
            render_template(&tera, "analysis/show.html", &context)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(format!("입력값을 확인해 주세요: {message}")).send();
            redirect("/analysis")
        }
        Err(err) => {
            FlashMessage::error(format!("분석 요청에 실패했습니다: {err}")).send();
            redirect("/analysis")
        }
    }
}

#[get("/analysis/{analysis_id}")]
/// Shows a previously generated analysis.
pub async fn show_analysis(
    analysis_id: web::Path<String>,
    gateway: web::Data<Gateway>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "analysis");

    match analysis_service::load_analysis(gateway.get_ref(), &analysis_id).await {
        Ok(view) => {
            let mut context = context;
            context.insert("analysis", &view);
            render_template(&tera, "analysis/show.html", &context)
        }
        Err(ServiceError::NotFound | ServiceError::TypeConstraint(_)) => render_error(
            &tera,
            context,
            StatusCode::NOT_FOUND,
            "분석 결과를 찾을 수 없습니다.",
            Some("/analysis"),
        ),
        Err(err) => {
            log::error!("Failed to load analysis {analysis_id}: {err}");
            let retry_url = format!("/analysis/{analysis_id}");
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
