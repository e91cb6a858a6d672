//! DTOs shaped for the search page.

use serde::Serialize;

use crate::charts::format_stat;
use crate::domain::player::{PlayerRecord, PlayerStats, PlayerType, StatLine};
use crate::domain::search::SearchQuery;
use crate::pagination::Paginated;

/// One headline stat shown on a player card.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatBadge {
    pub label: &'static str,
    pub value: String,
}

/// A search hit prepared for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlayerCard {
    pub player_id: Option<String>,
    pub name: String,
    pub team: String,
    pub season: i32,
    pub player_type: PlayerType,
    pub badges: Vec<StatBadge>,
}

impl From<&PlayerRecord> for PlayerCard {
    fn from(record: &PlayerRecord) -> Self {
        let badge = |label: &'static str, key: &str| StatBadge {
            label,
            value: format_stat(record.stat(key), key),
        };

        let badges = match &record.stats {
            PlayerStats::Batter(_) => vec![
                badge("AVG", "batting_average"),
                badge("HR", "home_runs"),
                badge("RBI", "rbi"),
                badge("OPS", "ops"),
            ],
            PlayerStats::Pitcher(stats) => vec![
                badge("ERA", "era"),
                StatBadge {
                    label: "W-L",
                    value: format!(
                        "{}-{}",
                        format_stat(Some(stats.wins.unwrap_or(0.0)), "wins"),
                        format_stat(Some(stats.losses.unwrap_or(0.0)), "losses"),
                    ),
                },
                badge("SO", "strikeouts"),
                badge("WHIP", "whip"),
            ],
        };

        Self {
            player_id: record.player_id.clone(),
            name: record.name.clone(),
            team: record.team.clone(),
            season: record.season,
            player_type: record.player_type(),
            badges,
        }
    }
}

/// Current filters echoed back into the form, blank when unset.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchFilters {
    pub query: String,
    pub player_type: String,
    pub team: String,
    pub season: Option<i32>,
    pub limit: usize,
}

impl From<&SearchQuery> for SearchFilters {
    fn from(query: &SearchQuery) -> Self {
        Self {
            query: query.text.clone().unwrap_or_default(),
            player_type: query
                .player_type
                .map(|player_type| player_type.as_str().to_string())
                .unwrap_or_default(),
            team: query.team.clone().unwrap_or_default(),
            season: query.season,
            limit: query.limit.get(),
        }
    }
}

/// Data required to render the search template.
#[derive(Debug, Serialize)]
pub struct SearchPageData {
    pub filters: SearchFilters,
    /// `false` until at least one filter is set.
    pub enabled: bool,
    pub players: Paginated<PlayerCard>,
    /// Rendered failure of the last fetch.
    pub error: Option<String>,
    pub teams: Vec<String>,
    pub seasons: Vec<i32>,
    /// Current filters as a `/search` url ending in `page=`.
    pub page_link: String,
}
