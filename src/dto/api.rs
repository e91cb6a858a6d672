//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

use crate::domain::player::PlayerRecord;

/// Body returned by `/api/v1/search`.
#[derive(Debug, Serialize)]
pub struct SearchApiResponse {
    pub results: Vec<PlayerRecord>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub page: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}
