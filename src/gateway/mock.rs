//! Mock gateway implementation for isolating services in tests.

use mockall::mock;

use crate::domain::analysis::{AnalysisRequest, AnalysisResponse};
use crate::domain::player::{PlayerRecord, PlayerType};
use crate::domain::search::{SearchQuery, SearchResult};
use crate::domain::summary::StatsSummary;
use crate::domain::types::AnalysisId;
use crate::gateway::errors::GatewayResult;
use crate::gateway::{
    AnalysisReader, AnalysisWriter, PlayerListQuery, PlayerReader, PlayerStatsQuery,
    TeamListQuery,
};

mock! {
    pub Gateway {}

    impl PlayerReader for Gateway {
        async fn get_stats_summary(&self) -> GatewayResult<StatsSummary>;
        async fn search_players(&self, query: SearchQuery) -> GatewayResult<SearchResult>;
        async fn get_player_stats(
            &self,
            query: PlayerStatsQuery,
        ) -> GatewayResult<Vec<PlayerRecord>>;
        async fn list_player_names(&self, query: PlayerListQuery) -> GatewayResult<Vec<String>>;
        async fn list_teams(&self, query: TeamListQuery) -> GatewayResult<Vec<String>>;
        async fn list_seasons(&self, player_type: Option<PlayerType>) -> GatewayResult<Vec<i32>>;
    }

    impl AnalysisReader for Gateway {
        async fn get_analysis(&self, id: AnalysisId) -> GatewayResult<AnalysisResponse>;
    }

    impl AnalysisWriter for Gateway {
        async fn request_analysis(
            &self,
            request: AnalysisRequest,
        ) -> GatewayResult<AnalysisResponse>;
    }
}
