use serde::Serialize;

use crate::domain::summary::StatsSummary;

/// Data required to render the landing page.
#[derive(Debug, Serialize)]
pub struct HomePageData {
    pub summary: StatsSummary,
    /// Season span such as `"2015-2024"`, empty when no seasons are loaded.
    pub season_span: String,
}

impl From<StatsSummary> for HomePageData {
    fn from(summary: StatsSummary) -> Self {
        let season_span = if summary.total_seasons == 0 {
            String::new()
        } else if summary.earliest_season == summary.latest_season {
            summary.latest_season.to_string()
        } else {
            format!("{}-{}", summary.earliest_season, summary.latest_season)
        };
        Self {
            summary,
            season_span,
        }
    }
}
