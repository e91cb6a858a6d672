//! In-process fake of the stats backend.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use parking_lot::Mutex;
use serde_json::{Value, json};
use url::Url;

use mlb_stats_web::gateway::cached::CachedGateway;
use mlb_stats_web::gateway::http::HttpGateway;

type Requests = Arc<Mutex<Vec<String>>>;
type Params = web::Query<HashMap<String, String>>;

pub struct FakeBackend {
    pub base_url: Url,
    requests: Requests,
    handle: ServerHandle,
}

impl FakeBackend {
    /// Binds the fake to an ephemeral port on the current actix runtime.
    pub async fn start() -> Self {
        let requests: Requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(recorded.clone()))
                .service(
                    web::scope("/api/v1")
                        .route("/players/summary", web::get().to(summary))
                        .route("/players/search", web::get().to(search))
                        .route("/players/teams", web::get().to(teams))
                        .route("/players/seasons", web::get().to(seasons))
                        .route("/players/batters", web::get().to(batters))
                        .route("/players/pitchers", web::get().to(pitchers))
                        .route("/players/{id}/stats", web::get().to(player_stats))
                        .route("/analysis/", web::post().to(create_analysis))
                        .route("/analysis/{id}", web::get().to(get_analysis)),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake backend");

        let port = server.addrs()[0].port();
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: Url::parse(&format!("http://127.0.0.1:{port}/api/v1/"))
                .expect("valid url"),
            requests,
            handle,
        }
    }

    /// Gateway pointed at the fake, with the given cache capacity.
    pub fn gateway(&self, cache_capacity: usize) -> CachedGateway<HttpGateway> {
        self.gateway_with_ttl(cache_capacity, Duration::from_secs(300))
    }

    pub fn gateway_with_ttl(
        &self,
        cache_capacity: usize,
        ttl: Duration,
    ) -> CachedGateway<HttpGateway> {
        let http = HttpGateway::new(self.base_url.clone(), Duration::from_secs(5))
            .expect("client builds");
        CachedGateway::new(http, cache_capacity, ttl)
    }

    /// `METHOD /path?query` of every request received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|line| line.starts_with(prefix))
            .count()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

fn record(req: &HttpRequest) {
    if let Some(requests) = req.app_data::<web::Data<Requests>>() {
        let line = match req.query_string() {
            "" => format!("{} {}", req.method(), req.path()),
            query => format!("{} {}?{}", req.method(), req.path(), query),
        };
        requests.lock().push(line);
    }
}

pub fn batter(name: &str, team: &str, season: i32) -> Value {
    json!({
        "player_id": name.to_lowercase().replace(' ', ""),
        "player_name": name,
        "team": team,
        "season": season,
        "player_type": "batter",
        "stats": {
            "season": season,
            "batting_average": 0.311,
            "home_runs": 62.0,
            "rbi": 131.0,
            "ops": 1.111
        }
    })
}

pub fn pitcher(name: &str, season: i32, era: f64) -> Value {
    json!({
        "player_id": "colege01",
        "player_name": name,
        "team": "NYY",
        "season": season,
        "player_type": "pitcher",
        "stats": {"season": season, "era": era, "whip": 0.98, "wins": 15.0, "losses": 4.0}
    })
}

async fn summary(req: HttpRequest) -> HttpResponse {
    record(&req);
    HttpResponse::Ok().json(json!({
        "total_players": 1523,
        "batter_count": 812,
        "pitcher_count": 711,
        "total_seasons": 10,
        "latest_season": 2024,
        "earliest_season": 2015,
        "last_updated": "2024-10-01"
    }))
}

/// Teams named `ERR` fail; everything else has 45 hits.
async fn search(req: HttpRequest, params: Params) -> HttpResponse {
    record(&req);
    if params.get("team").map(String::as_str) == Some("ERR") {
        return HttpResponse::InternalServerError().json(json!({"detail": "database unavailable"}));
    }

    let limit: usize = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(20);
    let offset: usize = params.get("offset").and_then(|v| v.parse().ok()).unwrap_or(0);
    let team = params.get("team").cloned().unwrap_or_else(|| "NYY".into());
    let total = 45;
    let results: Vec<Value> = (offset..total.min(offset + limit))
        .map(|i| batter(&format!("Player {i}"), &team, 2022))
        .collect();

    HttpResponse::Ok().json(json!({
        "results": results,
        "total": total,
        "offset": offset,
        "limit": limit
    }))
}

async fn teams(req: HttpRequest) -> HttpResponse {
    record(&req);
    HttpResponse::Ok().json(json!(["BOS", "NYY"]))
}

async fn seasons(req: HttpRequest) -> HttpResponse {
    record(&req);
    HttpResponse::Ok().json(json!([2022, 2023]))
}

async fn batters(req: HttpRequest) -> HttpResponse {
    record(&req);
    HttpResponse::Ok().json(json!(["Aaron Judge", "Mookie Betts"]))
}

async fn pitchers(req: HttpRequest) -> HttpResponse {
    record(&req);
    HttpResponse::Ok().json(json!(["Gerrit Cole"]))
}

/// `colege01` has a series, `judgeaa01` a single record, anything else 404s.
async fn player_stats(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    record(&req);
    match path.as_str() {
        "colege01" => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "ok",
            "data": [pitcher("Gerrit Cole", 2021, 3.23), pitcher("Gerrit Cole", 2020, 2.84)]
        })),
        "judgeaa01" => HttpResponse::Ok().json(json!({
            "success": true,
            "data": batter("Aaron Judge", "NYY", 2022)
        })),
        _ => HttpResponse::NotFound().json(json!({"detail": "Player not found"})),
    }
}

async fn create_analysis(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    record(&req);
    let name = body["player_name"].as_str().unwrap_or_default().to_string();
    if name == "Nobody" {
        return HttpResponse::Ok().json(json!({
            "success": false,
            "message": "Player not found"
        }));
    }
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "player_name": name,
            "analysis_text": "Elite power.\n\nPlate discipline improved.",
            "generated_at": "2024-10-01T12:00:00",
            "analysis_type": body["analysis_type"],
            "language": body["language"]
        }
    }))
}

async fn get_analysis(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    record(&req);
    if path.as_str() != "a1" {
        return HttpResponse::NotFound().json(json!({"detail": "Analysis not found"}));
    }
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "player_name": "Shohei Ohtani",
            "analysis_text": "Two-way star.",
            "generated_at": "2024-09-30T08:15:00Z",
            "analysis_type": "individual",
            "language": "english"
        }
    }))
}
