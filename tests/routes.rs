use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::cookie::Key;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::{FlashMessagesFramework, Level};
use serde_json::Value;

use mlb_stats_web::routes::{self, Gateway, alert_level_to_str};

mod common;

use common::FakeBackend;

#[::core::prelude::v1::test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

async fn app(
    gateway: Gateway,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    let message_store = CookieMessageStore::builder(Key::from(&[7u8; 64][..])).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();
    let tera = routes::build_tera("templates/**/*").expect("templates parse");

    test::init_service(
        App::new()
            .wrap(message_framework)
            .configure(routes::configure)
            .app_data(web::Data::new(tera))
            .app_data(web::Data::new(gateway)),
    )
    .await
}

async fn get<S, B>(app: &S, uri: &str) -> (StatusCode, String)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[actix_web::test]
async fn index_shows_summary() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("1523"));
    assert!(body.contains("2015 - 2024") || body.contains("2015-2024"));
    backend.stop().await;
}

#[actix_web::test]
async fn index_without_backend_offers_retry() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;
    backend.stop().await;

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("다시 시도"));
}

#[actix_web::test]
async fn empty_search_does_not_query_backend() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let (status, body) = get(&app, "/search").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("검색을 시작하세요"));
    assert_eq!(backend.count("GET /api/v1/players/search"), 0);
    backend.stop().await;
}

#[actix_web::test]
async fn filtered_search_renders_cards_and_pages() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let (status, body) = get(&app, "/search?team=NYY&page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Player 20"));
    assert!(body.contains("team=NYY&amp;page=3"));
    assert!(
        backend
            .requests()
            .contains(&"GET /api/v1/players/search?team=NYY&limit=20&offset=20".to_string())
    );
    backend.stop().await;
}

#[actix_web::test]
async fn failed_search_is_shown_with_retry() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let (status, body) = get(&app, "/search?team=ERR").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("database unavailable"));
    assert!(body.contains("다시 시도"));
    backend.stop().await;
}

#[actix_web::test]
async fn invalid_search_parameters_are_rejected() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let (status, _) = get(&app, "/search?player_type=catcher").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    backend.stop().await;
}

#[actix_web::test]
async fn player_page_renders_series() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let (status, body) = get(&app, "/players/colege01?player_type=pitcher").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Gerrit Cole"));
    assert!(body.contains("2.84"));
    backend.stop().await;
}

#[actix_web::test]
async fn unknown_player_is_not_found() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let (status, _) = get(&app, "/players/missing?player_type=batter").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    backend.stop().await;
}

#[actix_web::test]
async fn compare_page_charts_both_players() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let (status, body) =
        get(&app, "/compare?player_type=pitcher&first=colege01&second=colege01&stat=era").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("평균자책점"));
    assert_eq!(backend.count("GET /api/v1/players/colege01/stats"), 2);
    backend.stop().await;
}

#[actix_web::test]
async fn blank_compare_page_skips_backend() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let (status, _) = get(&app, "/compare").await;

    assert_eq!(status, StatusCode::OK);
    assert!(backend.requests().is_empty());
    backend.stop().await;
}

#[actix_web::test]
async fn api_search_returns_paging() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/search?query=Judge&page=3")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 45);
    assert_eq!(body["page"], 3);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["has_next_page"], false);
    assert_eq!(body["has_prev_page"], true);
    assert_eq!(body["results"].as_array().map(Vec::len), Some(5));
    backend.stop().await;
}

#[actix_web::test]
async fn api_search_reports_backend_failure() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/search?team=ERR")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["detail"]
            .as_str()
            .is_some_and(|detail| detail.contains("database unavailable"))
    );
    backend.stop().await;
}

#[actix_web::test]
async fn analysis_request_renders_result() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let req = test::TestRequest::post()
        .uri("/analysis")
        .set_form([
            ("player_name", "Aaron Judge"),
            ("player_type", "batter"),
            ("language", "english"),
            ("analysis_type", "individual"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("Elite power."));
    assert!(body.contains("Plate discipline improved."));
    backend.stop().await;
}

#[actix_web::test]
async fn rejected_analysis_redirects_back() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let req = test::TestRequest::post()
        .uri("/analysis")
        .set_form([
            ("player_name", "Nobody"),
            ("player_type", "batter"),
            ("language", "korean"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/analysis")
    );
    backend.stop().await;
}

#[actix_web::test]
async fn stored_analysis_is_shown() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;

    let (status, body) = get(&app, "/analysis/a1").await;
    let (missing, _) = get(&app, "/analysis/zz").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Shohei Ohtani"));
    assert_eq!(missing, StatusCode::NOT_FOUND);
    backend.stop().await;
}

#[actix_web::test]
async fn out_of_range_page_is_a_bad_request() {
    let backend = FakeBackend::start().await;
    let app = app(backend.gateway(16)).await;
    let page = format!("page={}", usize::MAX);

    let (html, _) = get(&app, &format!("/search?team=NYY&{page}")).await;
    let (json, _) = get(&app, &format!("/api/v1/search?team=NYY&{page}")).await;

    assert_eq!(html, StatusCode::BAD_REQUEST);
    assert_eq!(json, StatusCode::BAD_REQUEST);
    assert_eq!(backend.count("GET /api/v1/players/search"), 0);
    backend.stop().await;
}
