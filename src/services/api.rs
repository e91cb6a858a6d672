use crate::dto::api::SearchApiResponse;
use crate::forms::search::{SearchForm, SearchPayload};
use crate::gateway::PlayerReader;
use crate::services::search::controller_for;
use crate::services::{ServiceError, ServiceResult};

/// JSON search with paging derived by the controller.
///
/// An unfiltered query returns an empty page without calling the backend.
pub async fn search_api<G>(gateway: &G, form: SearchForm) -> ServiceResult<SearchApiResponse>
where
    G: PlayerReader + ?Sized,
{
    let payload = SearchPayload::try_from(form)?;
    let mut controller = controller_for(payload);

    controller.fetch(gateway).await;
    if let Some(err) = controller.error() {
        return Err(ServiceError::from(err.clone()));
    }

    let query = controller.query();
    let (results, total) = controller
        .result()
        .map(|result| (result.items.clone(), result.total))
        .unwrap_or_default();

    Ok(SearchApiResponse {
        results,
        total,
        offset: query.offset,
        limit: query.limit.get(),
        page: controller.current_page(),
        total_pages: controller.total_pages(),
        has_next_page: controller.has_next_page(),
        has_prev_page: controller.has_prev_page(),
    })
}
