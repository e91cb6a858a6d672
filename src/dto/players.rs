//! DTOs shaped for the player detail page.

use serde::Serialize;

use crate::charts::{ChartData, stat_label};
use crate::domain::player::PlayerType;

/// Stat key with its display name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatColumn {
    pub key: String,
    pub label: String,
}

impl StatColumn {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            label: stat_label(key).to_string(),
        }
    }

    /// Every stat column of `player_type`.
    pub fn all(player_type: PlayerType) -> Vec<Self> {
        player_type.stat_keys().iter().map(|key| Self::new(key)).collect()
    }
}

/// One season of the stats table, values already formatted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatTableRow {
    pub season: i32,
    pub team: String,
    pub values: Vec<String>,
}

/// Aggregated data required to render the player detail page.
#[derive(Debug, Serialize)]
pub struct PlayerStatsPageData {
    pub player_id: String,
    pub name: String,
    pub player_type: PlayerType,
    pub season_start: Option<i32>,
    pub season_end: Option<i32>,
    /// Charted stat keys.
    pub selected: Vec<String>,
    /// Stat keys the user may chart.
    pub available: Vec<StatColumn>,
    pub chart: ChartData,
    pub chart_options: serde_json::Value,
    /// Table columns: only stats with at least one value.
    pub columns: Vec<StatColumn>,
    pub rows: Vec<StatTableRow>,
}
