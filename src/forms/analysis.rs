//! AI analysis request form.

use serde::Deserialize;
use validator::Validate;

use crate::domain::analysis::{AnalysisKind, AnalysisLanguage, AnalysisRequest};
use crate::domain::player::PlayerType;
use crate::domain::types::PlayerName;
use crate::forms::{FormError, non_blank};

#[derive(Debug, Deserialize, Validate)]
/// Form data posted from the analysis page.
pub struct AnalysisForm {
    /// Name of the analysed player.
    #[validate(length(min = 1, max = 100))]
    pub player_name: String,
    pub player_type: PlayerType,
    #[serde(default)]
    pub language: AnalysisLanguage,
    #[serde(default)]
    pub analysis_type: AnalysisKind,
    /// Second player, required for comparisons.
    #[serde(default)]
    #[validate(length(max = 100))]
    pub comparison_player: Option<String>,
}

impl TryFrom<AnalysisForm> for AnalysisRequest {
    type Error = FormError;

    fn try_from(form: AnalysisForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let player_name = PlayerName::new(form.player_name)
            .map_err(|_| FormError::InvalidPlayerName)?
            .into_inner();

        let comparison_player = match (form.analysis_type, non_blank(form.comparison_player)) {
            (AnalysisKind::Comparison, None) => return Err(FormError::MissingComparisonPlayer),
            (AnalysisKind::Comparison, player) => player,
            (AnalysisKind::Individual, _) => None,
        };

        Ok(AnalysisRequest {
            player_name,
            player_type: form.player_type,
            language: form.language,
            analysis_type: form.analysis_type,
            comparison_player,
        })
    }
}
