use serde::{Deserialize, Serialize};

/// Aggregate counts shown on the landing page.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_players: u64,
    pub batter_count: u64,
    pub pitcher_count: u64,
    pub total_seasons: u64,
    pub latest_season: i32,
    pub earliest_season: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}
