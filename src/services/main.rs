use crate::dto::main::HomePageData;
use crate::gateway::PlayerReader;
use crate::services::ServiceResult;

/// Loads the aggregate counts shown on the landing page.
pub async fn load_home<G>(gateway: &G) -> ServiceResult<HomePageData>
where
    G: PlayerReader + ?Sized,
{
    let summary = gateway.get_stats_summary().await.map_err(|err| {
        log::error!("Failed to load stats summary: {err}");
        err
    })?;

    Ok(HomePageData::from(summary))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::summary::StatsSummary;
    use crate::gateway::errors::GatewayError;
    use crate::gateway::mock::MockGateway;
    use crate::services::ServiceError;

    #[actix_web::test]
    async fn summary_is_wrapped_with_season_span() {
        let mut gateway = MockGateway::new();
        gateway.expect_get_stats_summary().times(1).returning(|| {
            Ok(StatsSummary {
                total_players: 1200,
                batter_count: 700,
                pitcher_count: 500,
                total_seasons: 10,
                latest_season: 2024,
                earliest_season: 2015,
                last_updated: None,
            })
        });

        let data = load_home(&gateway).await.expect("summary loads");

        assert_eq!(data.summary.total_players, 1200);
        assert_eq!(data.season_span, "2015-2024");
    }

    #[actix_web::test]
    async fn backend_failure_is_propagated() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_get_stats_summary()
            .returning(|| Err(GatewayError::Transport("connection refused".into())));

        let result = load_home(&gateway).await;

        assert!(matches!(
            result,
            Err(ServiceError::Gateway(GatewayError::Transport(_)))
        ));
    }
}
