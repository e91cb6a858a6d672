use serde::Serialize;

use crate::charts::ChartData;
use crate::dto::players::StatColumn;

/// Summary line of one compared player.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComparedPlayer {
    pub player_id: String,
    pub name: String,
    pub seasons: usize,
    /// Formatted career mean of the compared stat.
    pub average: String,
}

#[derive(Debug, Serialize)]
pub struct Comparison {
    pub key: String,
    pub label: String,
    pub chart: ChartData,
    pub chart_options: serde_json::Value,
    pub players: Vec<ComparedPlayer>,
}

/// Data required to render the comparison page.
#[derive(Debug, Serialize)]
pub struct ComparePageData {
    pub player_type: String,
    pub first: String,
    pub second: String,
    pub batter_stats: Vec<StatColumn>,
    pub pitcher_stats: Vec<StatColumn>,
    /// Present once both players were loaded.
    pub comparison: Option<Comparison>,
}
