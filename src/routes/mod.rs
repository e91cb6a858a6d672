//! HTTP routes and the rendering helpers they share.

use std::collections::HashMap;

use actix_cors::Cors;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, http::header, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera, Value};

use crate::charts::{format_stat, stat_label};
use crate::gateway::cached::CachedGateway;
use crate::gateway::http::HttpGateway;

pub mod analysis;
pub mod api;
pub mod compare;
pub mod main;
pub mod players;
pub mod search;

/// Gateway stack shared by all handlers.
pub type Gateway = CachedGateway<HttpGateway>;

/// Registers every page and the JSON api.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(Cors::permissive())
            .service(api::api_v1_search),
    )
    .service(main::show_index)
    .service(search::show_search)
    .service(players::show_player)
    .service(compare::show_compare)
    .service(analysis::show_analysis_form)
    .service(analysis::request_analysis)
    .service(analysis::show_analysis);
}

/// Maps a flash message level onto the bootstrap alert class.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info | Level::Debug => "info",
    }
}

/// Context every page template expects: pending alerts and the active
/// navigation entry.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, template, context, StatusCode::OK)
}

pub fn render_template_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Renders the shared error page with an optional retry link.
pub fn render_error(
    tera: &Tera,
    mut context: Context,
    status: StatusCode,
    message: &str,
    retry_url: Option<&str>,
) -> HttpResponse {
    context.insert("error_message", message);
    context.insert("retry_url", &retry_url);
    render_template_with_status(tera, "error.html", &context, status)
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Loads the templates and registers the stat filters.
pub fn build_tera(templates_dir: &str) -> tera::Result<Tera> {
    let mut tera = Tera::new(templates_dir)?;
    tera.register_filter("format_stat", format_stat_filter);
    tera.register_filter("stat_label", stat_label_filter);
    tera.register_filter("json_script", json_script_filter);
    Ok(tera)
}

/// `{{ value | format_stat(key="era") }}`
fn format_stat_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let key = args
        .get("key")
        .and_then(Value::as_str)
        .ok_or_else(|| tera::Error::msg("format_stat requires a `key` argument"))?;
    Ok(Value::String(format_stat(value.as_f64(), key)))
}

/// `{{ "era" | stat_label }}`
fn stat_label_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let key = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("stat_label expects a string"))?;
    Ok(Value::String(stat_label(key).to_string()))
}

/// `{{ chart | json_script | safe }}` for `<script type="application/json">`
/// blocks: JSON with the HTML-significant characters escaped.
fn json_script_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let json = serde_json::to_string(value).map_err(tera::Error::json)?;
    Ok(Value::String(
        json.replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(key: &str) -> HashMap<String, Value> {
        HashMap::from([("key".to_string(), Value::String(key.to_string()))])
    }

    #[test]
    fn format_filter_handles_missing_values() {
        assert_eq!(
            format_stat_filter(&Value::Null, &args("era")).expect("formats"),
            Value::String("-".into())
        );
        assert_eq!(
            format_stat_filter(&serde_json::json!(0.3005), &args("batting_average"))
                .expect("formats"),
            Value::String("0.301".into())
        );
        assert!(format_stat_filter(&Value::Null, &HashMap::new()).is_err());
    }

    #[test]
    fn label_filter_translates_keys() {
        assert_eq!(
            stat_label_filter(&Value::String("whip".into()), &HashMap::new()).expect("label"),
            Value::String("WHIP".into())
        );
    }

    #[test]
    fn json_script_cannot_close_the_script_block() {
        let value = serde_json::json!({"label": "</script><b>&"});
        let rendered = json_script_filter(&value, &HashMap::new()).expect("encodes");
        assert_eq!(
            rendered,
            Value::String(r#"{"label":"\u003c/script\u003e\u003cb\u003e\u0026"}"#.into())
        );
    }

    #[test]
    fn redirect_uses_see_other() {
        let response = redirect("/analysis");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/analysis")
        );
    }
}
