//! `reqwest` implementation of the gateway traits.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::analysis::{AnalysisRequest, AnalysisResponse};
use crate::domain::player::{PlayerRecord, PlayerType};
use crate::domain::search::{SearchQuery, SearchResult};
use crate::domain::summary::StatsSummary;
use crate::domain::types::AnalysisId;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::{
    AnalysisReader, AnalysisWriter, PlayerListQuery, PlayerReader, PlayerStatsQuery,
    TeamListQuery,
};

const USER_AGENT: &str = concat!("mlb-stats-web/", env!("CARGO_PKG_VERSION"));

type QueryParams = Vec<(&'static str, String)>;

/// Backend client rooted at the API base url (e.g. `http://localhost:8000/api/v1/`).
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

/// Wrapper the backend puts around stats and analysis payloads.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    #[serde(default = "envelope_success_default")]
    success: bool,
    message: Option<String>,
    data: Option<T>,
}

fn envelope_success_default() -> bool {
    true
}

impl<T> ApiEnvelope<T> {
    fn into_data(self) -> GatewayResult<T> {
        let message = self.message.unwrap_or_default();
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(GatewayError::Rejected(format!(
                "response carried no data: {message}"
            ))),
            (false, _) => Err(GatewayError::Rejected(message)),
        }
    }
}

/// The stats endpoint returns either the latest record or the full series.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// FastAPI error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl HttpGateway {
    /// Builds a client with a blanket request timeout.
    pub fn new(base_url: Url, timeout: Duration) -> GatewayResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidRequest(format!(
                "backend url {base_url} cannot be a base"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Appends escaped path segments to the base url.
    fn endpoint(&self, segments: &[&str]) -> GatewayResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GatewayError::InvalidRequest(format!(
                    "backend url {} cannot be a base",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T>(&self, segments: &[&str], params: &QueryParams) -> GatewayResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        log::debug!("GET {url} {params:?}");
        let response = self.client.get(url).query(params).send().await?;
        decode_response(response).await
    }

    async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> GatewayResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        log::debug!("POST {url}");
        let response = self.client.post(url).json(body).send().await?;
        decode_response(response).await
    }
}

async fn decode_response<T>(response: Response) -> GatewayResult<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(GatewayError::NotFound);
    }

    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(GatewayError::Status {
            status: status.as_u16(),
            detail: error_detail(&body),
        });
    }

    serde_json::from_slice(&body).map_err(GatewayError::from)
}

/// Extracts the `detail` field of an error body, falling back to the raw text.
fn error_detail(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => detail,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) => String::from_utf8_lossy(body).trim().to_string(),
    }
}

fn search_params(query: &SearchQuery) -> QueryParams {
    let mut params = Vec::new();
    if let Some(text) = &query.text {
        params.push(("query", text.clone()));
    }
    if let Some(player_type) = query.player_type {
        params.push(("player_type", player_type.to_string()));
    }
    if let Some(team) = &query.team {
        params.push(("team", team.clone()));
    }
    if let Some(season) = query.season {
        params.push(("season", season.to_string()));
    }
    params.push(("limit", query.limit.to_string()));
    if query.offset > 0 {
        params.push(("offset", query.offset.to_string()));
    }
    params
}

fn player_stats_params(query: &PlayerStatsQuery) -> QueryParams {
    let mut params = vec![("player_type", query.player_type.to_string())];
    if let Some(start) = query.season_start {
        params.push(("season_start", start.to_string()));
    }
    if let Some(end) = query.season_end {
        params.push(("season_end", end.to_string()));
    }
    params
}

fn player_list_params(query: &PlayerListQuery) -> QueryParams {
    let mut params = Vec::new();
    if let Some(season) = query.season {
        params.push(("season", season.to_string()));
    }
    if let Some(team) = &query.team {
        params.push(("team", team.clone()));
    }
    if let Some(limit) = query.limit {
        params.push(("limit", limit.to_string()));
    }
    params
}

fn team_list_params(query: &TeamListQuery) -> QueryParams {
    let mut params = Vec::new();
    if let Some(player_type) = query.player_type {
        params.push(("player_type", player_type.to_string()));
    }
    if let Some(season) = query.season {
        params.push(("season", season.to_string()));
    }
    params
}

impl PlayerReader for HttpGateway {
    async fn get_stats_summary(&self) -> GatewayResult<StatsSummary> {
        self.get_json(&["players", "summary"], &Vec::new()).await
    }

    async fn search_players(&self, query: SearchQuery) -> GatewayResult<SearchResult> {
        self.get_json(&["players", "search"], &search_params(&query))
            .await
    }

    async fn get_player_stats(
        &self,
        query: PlayerStatsQuery,
    ) -> GatewayResult<Vec<PlayerRecord>> {
        let envelope: ApiEnvelope<OneOrMany<PlayerRecord>> = self
            .get_json(
                &["players", query.player_id.as_str(), "stats"],
                &player_stats_params(&query),
            )
            .await?;
        envelope.into_data().map(Vec::from)
    }

    async fn list_player_names(&self, query: PlayerListQuery) -> GatewayResult<Vec<String>> {
        let collection = match query.player_type {
            PlayerType::Batter => "batters",
            PlayerType::Pitcher => "pitchers",
        };
        self.get_json(&["players", collection], &player_list_params(&query))
            .await
    }

    async fn list_teams(&self, query: TeamListQuery) -> GatewayResult<Vec<String>> {
        self.get_json(&["players", "teams"], &team_list_params(&query))
            .await
    }

    async fn list_seasons(&self, player_type: Option<PlayerType>) -> GatewayResult<Vec<i32>> {
        let params = player_type
            .map(|player_type| vec![("player_type", player_type.to_string())])
            .unwrap_or_default();
        self.get_json(&["players", "seasons"], &params).await
    }
}

impl AnalysisReader for HttpGateway {
    async fn get_analysis(&self, id: AnalysisId) -> GatewayResult<AnalysisResponse> {
        let envelope: ApiEnvelope<AnalysisResponse> = self
            .get_json(&["analysis", id.as_str()], &Vec::new())
            .await?;
        envelope.into_data()
    }
}

impl AnalysisWriter for HttpGateway {
    async fn request_analysis(
        &self,
        request: AnalysisRequest,
    ) -> GatewayResult<AnalysisResponse> {
        // The collection route is `/analysis/`; without the slash the
        // backend answers with a redirect.
        let envelope: ApiEnvelope<AnalysisResponse> =
            self.post_json(&["analysis", ""], &request).await?;
        envelope.into_data()
    }
}
