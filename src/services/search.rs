//! Search page workflow.

use url::form_urlencoded;

use crate::controller::SearchController;
use crate::domain::search::SearchQuery;
use crate::domain::types::PageLimit;
use crate::dto::search::{PlayerCard, SearchFilters, SearchPageData};
use crate::forms::search::SearchPayload;
use crate::gateway::{PlayerReader, TeamListQuery};
use crate::pagination::Paginated;
use crate::services::ServiceResult;

/// Builds the controller for one request: filters first, then the page.
pub fn controller_for(payload: SearchPayload) -> SearchController {
    let mut controller = SearchController::new();
    controller.update_query(payload.update);
    controller.go_to_page(payload.page);
    controller
}

/// Runs the controller's fetch and loads the filter value lists.
///
/// A failed search is reported through `error` so the page can offer a retry;
/// failing filter lists are logged and left empty.
pub async fn load_search_page<G>(
    gateway: &G,
    controller: &mut SearchController,
) -> ServiceResult<SearchPageData>
where
    G: PlayerReader + ?Sized,
{
    controller.fetch(gateway).await;

    let player_type = controller.query().player_type;
    let mut team_query = TeamListQuery::new();
    team_query.player_type = player_type;
    team_query.season = controller.query().season;

    let teams = gateway.list_teams(team_query).await.unwrap_or_else(|err| {
        log::warn!("Failed to load team filter values: {err}");
        Vec::new()
    });
    let seasons = gateway.list_seasons(player_type).await.unwrap_or_else(|err| {
        log::warn!("Failed to load season filter values: {err}");
        Vec::new()
    });

    let cards = controller
        .result()
        .map(|result| result.items.iter().map(PlayerCard::from).collect())
        .unwrap_or_default();

    Ok(SearchPageData {
        filters: SearchFilters::from(controller.query()),
        enabled: controller.is_enabled(),
        players: Paginated::from_controller(cards, controller),
        error: controller.error().map(ToString::to_string),
        teams,
        seasons,
        page_link: page_link(controller.query()),
    })
}

/// `/search` url carrying the filters of `query`, ready for a page number.
fn page_link(query: &SearchQuery) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    if let Some(text) = &query.text {
        params.append_pair("query", text);
    }
    if let Some(player_type) = query.player_type {
        params.append_pair("player_type", player_type.as_str());
    }
    if let Some(team) = &query.team {
        params.append_pair("team", team);
    }
    if let Some(season) = query.season {
        params.append_pair("season", &season.to_string());
    }
    if query.limit != PageLimit::default() {
        params.append_pair("limit", &query.limit.to_string());
    }
    params.append_pair("page", "");
    format!("/search?{}", params.finish())
}
