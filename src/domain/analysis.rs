//! AI-generated player analysis.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::player::PlayerType;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisLanguage {
    #[default]
    Korean,
    English,
    Japanese,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    #[default]
    Individual,
    Comparison,
}

/// Payload posted to the backend to generate an analysis.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisRequest {
    pub player_name: String,
    pub player_type: PlayerType,
    #[serde(default)]
    pub language: AnalysisLanguage,
    #[serde(default)]
    pub analysis_type: AnalysisKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_player: Option<String>,
}

/// Generated analysis as returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResponse {
    pub player_name: String,
    pub analysis_text: String,
    pub generated_at: String,
    pub analysis_type: String,
    pub language: String,
}

impl AnalysisResponse {
    /// Parses `generated_at`, accepting RFC 3339 and naive ISO timestamps
    /// (the latter are taken as UTC).
    pub fn generated_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.generated_at.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(generated_at: &str) -> AnalysisResponse {
        AnalysisResponse {
            player_name: "Mookie Betts".into(),
            analysis_text: "...".into(),
            generated_at: generated_at.into(),
            analysis_type: "individual".into(),
            language: "korean".into(),
        }
    }

    #[test]
    fn parses_rfc3339_and_naive_timestamps() {
        let rfc = response("2024-01-01T00:00:00Z").generated_at_utc();
        let naive = response("2024-01-01T00:00:00.123456").generated_at_utc();

        assert_eq!(rfc.map(|ts| ts.timestamp()), Some(1_704_067_200));
        assert_eq!(naive.map(|ts| ts.timestamp()), Some(1_704_067_200));
        assert!(response("yesterday").generated_at_utc().is_none());
    }

    #[test]
    fn request_serializes_defaults() {
        let request = AnalysisRequest {
            player_name: "Mookie Betts".into(),
            player_type: PlayerType::Batter,
            language: AnalysisLanguage::default(),
            analysis_type: AnalysisKind::default(),
            comparison_player: None,
        };

        let value = serde_json::to_value(&request).expect("serializable");
        assert_eq!(value["language"], "korean");
        assert_eq!(value["analysis_type"], "individual");
        assert_eq!(value["player_type"], "batter");
        assert!(value.get("comparison_player").is_none());
    }
}
