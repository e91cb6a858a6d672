//! AI analysis workflows.

use crate::domain::analysis::AnalysisRequest;
use crate::domain::player::PlayerType;
use crate::domain::types::AnalysisId;
use crate::dto::analysis::{AnalysisFormData, AnalysisView};
use crate::forms::analysis::AnalysisForm;
use crate::gateway::{AnalysisReader, AnalysisWriter, PlayerListQuery, PlayerReader};
use crate::services::ServiceResult;

/// Number of names suggested per player type on the analysis form.
const SUGGESTION_LIMIT: usize = 200;

/// Loads name suggestions for the analysis form. Missing lists degrade to
/// free text input.
pub async fn load_analysis_form<G>(gateway: &G) -> AnalysisFormData
where
    G: PlayerReader + ?Sized,
{
    let mut data = AnalysisFormData::default();
    for player_type in [PlayerType::Batter, PlayerType::Pitcher] {
        let query = PlayerListQuery::new(player_type).limit(SUGGESTION_LIMIT);
        let names = gateway.list_player_names(query).await.unwrap_or_else(|err| {
            log::warn!("Failed to load {player_type} names: {err}");
            Vec::new()
        });
        match player_type {
            PlayerType::Batter => data.batters = names,
            PlayerType::Pitcher => data.pitchers = names,
        }
    }
    data
}

/// Validates the form and asks the backend for a new analysis.
pub async fn request_analysis<G>(gateway: &G, form: AnalysisForm) -> ServiceResult<AnalysisView>
where
    G: AnalysisWriter + ?Sized,
{
    let request = AnalysisRequest::try_from(form)?;
    log::info!(
        "Requesting {:?} analysis of {}",
        request.analysis_type,
        request.player_name
    );

    let response = gateway.request_analysis(request).await.map_err(|err| {
        log::error!("Failed to request analysis: {err}");
        err
    })?;

    Ok(AnalysisView::from(response))
}

/// Fetches a previously generated analysis.
pub async fn load_analysis<G>(gateway: &G, analysis_id: &str) -> ServiceResult<AnalysisView>
where
    G: AnalysisReader + ?Sized,
{
    let analysis_id = AnalysisId::new(analysis_id)?;
    let response = gateway.get_analysis(analysis_id).await?;
    Ok(AnalysisView::from(response))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::analysis::{AnalysisKind, AnalysisLanguage, AnalysisResponse};
    use crate::gateway::errors::GatewayError;
    use crate::gateway::mock::MockGateway;
    use crate::services::ServiceError;

    fn response(text: &str) -> AnalysisResponse {
        AnalysisResponse {
            player_name: "Gerrit Cole".into(),
            analysis_text: text.into(),
            generated_at: "2024-05-01T09:00:00".into(),
            analysis_type: "individual".into(),
            language: "korean".into(),
        }
    }

    fn form() -> AnalysisForm {
        AnalysisForm {
            player_name: " Gerrit Cole ".into(),
            player_type: PlayerType::Pitcher,
            language: AnalysisLanguage::Korean,
            analysis_type: AnalysisKind::Individual,
            comparison_player: None,
        }
    }

    #[actix_web::test]
    async fn request_sends_trimmed_name() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_request_analysis()
            .withf(|request| request.player_name == "Gerrit Cole")
            .times(1)
            .returning(|_| Ok(response("Dominant.\n\nDurable.")));

        let view = request_analysis(&gateway, form()).await.expect("analysis");

        assert_eq!(view.paragraphs, vec!["Dominant.", "Durable."]);
        assert_eq!(view.generated_at, "2024-05-01 09:00 UTC");
    }

    #[actix_web::test]
    async fn rejected_request_is_gateway_error() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_request_analysis()
            .returning(|_| Err(GatewayError::Rejected("quota exceeded".into())));

        let result = request_analysis(&gateway, form()).await;

        assert!(matches!(
            result,
            Err(ServiceError::Gateway(GatewayError::Rejected(_)))
        ));
    }

    #[actix_web::test]
    async fn blank_analysis_id_is_rejected_before_backend() {
        let mut gateway = MockGateway::new();
        gateway.expect_get_analysis().times(0);

        let result = load_analysis(&gateway, "  ").await;

        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }

    #[actix_web::test]
    async fn suggestions_survive_partial_failure() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list_player_names()
            .withf(|query| query.player_type == PlayerType::Batter)
            .returning(|_| Ok(vec!["Aaron Judge".into()]));
        gateway
            .expect_list_player_names()
            .withf(|query| query.player_type == PlayerType::Pitcher)
            .returning(|_| Err(GatewayError::Transport("down".into())));

        let data = load_analysis_form(&gateway).await;

        assert_eq!(data.batters, vec!["Aaron Judge"]);
        assert!(data.pitchers.is_empty());
    }
}
