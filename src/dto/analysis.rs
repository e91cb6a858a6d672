use serde::Serialize;

use crate::domain::analysis::AnalysisResponse;

/// Name lists offered as suggestions on the analysis form.
#[derive(Debug, Default, Serialize)]
pub struct AnalysisFormData {
    pub batters: Vec<String>,
    pub pitchers: Vec<String>,
}

/// A generated analysis prepared for display.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AnalysisView {
    pub player_name: String,
    pub paragraphs: Vec<String>,
    /// `YYYY-MM-DD HH:MM UTC`, or the raw backend value when unparseable.
    pub generated_at: String,
    pub analysis_type: String,
    pub language: String,
}

impl From<AnalysisResponse> for AnalysisView {
    fn from(response: AnalysisResponse) -> Self {
        let generated_at = response
            .generated_at_utc()
            .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| response.generated_at.clone());

        let paragraphs = response
            .analysis_text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            player_name: response.player_name,
            paragraphs,
            generated_at,
            analysis_type: response.analysis_type,
            language: response.language,
        }
    }
}
