//! Remote data gateway: the backend API behind reader/writer traits.
//!
//! Services depend on these traits only, so pages can be exercised against
//! the mock in [`mock`] while the server wires in [`http::HttpGateway`]
//! wrapped by [`cached::CachedGateway`].

#![allow(async_fn_in_trait)]

use crate::domain::analysis::{AnalysisRequest, AnalysisResponse};
use crate::domain::player::{PlayerRecord, PlayerType};
use crate::domain::search::{SearchQuery, SearchResult};
use crate::domain::summary::StatsSummary;
use crate::domain::types::{AnalysisId, PlayerId};
use crate::gateway::errors::GatewayResult;

pub mod cached;
pub mod errors;
#[cfg(feature = "server")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Time series request for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStatsQuery {
    pub player_id: PlayerId,
    pub player_type: PlayerType,
    pub season_start: Option<i32>,
    pub season_end: Option<i32>,
}

/// Player name list request (`/players/batters` or `/players/pitchers`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerListQuery {
    pub player_type: PlayerType,
    pub season: Option<i32>,
    pub team: Option<String>,
    pub limit: Option<usize>,
}

/// Team filter values request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamListQuery {
    pub player_type: Option<PlayerType>,
    pub season: Option<i32>,
}

impl PlayerStatsQuery {
    pub fn new(player_id: PlayerId, player_type: PlayerType) -> Self {
        Self {
            player_id,
            player_type,
            season_start: None,
            season_end: None,
        }
    }

    pub fn seasons(mut self, start: Option<i32>, end: Option<i32>) -> Self {
        self.season_start = start;
        self.season_end = end;
        self
    }
}

impl PlayerListQuery {
    pub fn new(player_type: PlayerType) -> Self {
        Self {
            player_type,
            season: None,
            team: None,
            limit: None,
        }
    }

    pub fn season(mut self, season: i32) -> Self {
        self.season = Some(season);
        self
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl TeamListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_type(mut self, player_type: PlayerType) -> Self {
        self.player_type = Some(player_type);
        self
    }

    pub fn season(mut self, season: i32) -> Self {
        self.season = Some(season);
        self
    }
}

pub trait PlayerReader {
    async fn get_stats_summary(&self) -> GatewayResult<StatsSummary>;
    async fn search_players(&self, query: SearchQuery) -> GatewayResult<SearchResult>;
    async fn get_player_stats(&self, query: PlayerStatsQuery)
    -> GatewayResult<Vec<PlayerRecord>>;
    async fn list_player_names(&self, query: PlayerListQuery) -> GatewayResult<Vec<String>>;
    async fn list_teams(&self, query: TeamListQuery) -> GatewayResult<Vec<String>>;
    async fn list_seasons(&self, player_type: Option<PlayerType>) -> GatewayResult<Vec<i32>>;
}

pub trait AnalysisReader {
    async fn get_analysis(&self, id: AnalysisId) -> GatewayResult<AnalysisResponse>;
}

pub trait AnalysisWriter {
    async fn request_analysis(&self, request: AnalysisRequest)
    -> GatewayResult<AnalysisResponse>;
}
