//! LRU cache in front of a gateway, keyed by the full search query.
//!
//! Only successful search pages are stored, so a failed fetch is always
//! re-issued on retry. A stored page is served until it is older than the
//! configured time to live. Everything else is passed through.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;

use crate::domain::analysis::{AnalysisRequest, AnalysisResponse};
use crate::domain::player::{PlayerRecord, PlayerType};
use crate::domain::search::{SearchQuery, SearchResult};
use crate::domain::summary::StatsSummary;
use crate::domain::types::AnalysisId;
use crate::gateway::errors::GatewayResult;
use crate::gateway::{
    AnalysisReader, AnalysisWriter, PlayerListQuery, PlayerReader, PlayerStatsQuery,
    TeamListQuery,
};

struct CachedPage {
    stored_at: Instant,
    result: SearchResult,
}

pub struct CachedGateway<G> {
    inner: G,
    ttl: Duration,
    searches: Option<Mutex<LruCache<SearchQuery, CachedPage>>>,
}

impl<G> CachedGateway<G> {
    /// Wraps `inner`, keeping up to `capacity` pages for `ttl` each.
    /// A capacity of zero disables caching.
    pub fn new(inner: G, capacity: usize, ttl: Duration) -> Self {
        let searches = NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap)));
        Self {
            inner,
            ttl,
            searches,
        }
    }

    /// Number of cached search pages.
    pub fn cached_searches(&self) -> usize {
        self.searches.as_ref().map_or(0, |cache| cache.lock().len())
    }

    /// Returns a fresh cached page; an expired one is evicted.
    fn lookup(&self, query: &SearchQuery) -> Option<SearchResult> {
        let mut cache = self.searches.as_ref()?.lock();
        let page = cache.get(query)?;
        if page.stored_at.elapsed() < self.ttl {
            return Some(page.result.clone());
        }
        log::debug!("search cache entry expired for {query:?}");
        cache.pop(query);
        None
    }

    fn store(&self, query: SearchQuery, result: &SearchResult) {
        if let Some(cache) = &self.searches {
            cache.lock().put(
                query,
                CachedPage {
                    stored_at: Instant::now(),
                    result: result.clone(),
                },
            );
        }
    }
}

impl<G> PlayerReader for CachedGateway<G>
where
    G: PlayerReader,
{
    async fn get_stats_summary(&self) -> GatewayResult<StatsSummary> {
        self.inner.get_stats_summary().await
    }

    async fn search_players(&self, query: SearchQuery) -> GatewayResult<SearchResult> {
        if let Some(hit) = self.lookup(&query) {
            log::debug!("search cache hit for {query:?}");
            return Ok(hit);
        }

        let result = self.inner.search_players(query.clone()).await?;
        self.store(query, &result);
        Ok(result)
    }

    async fn get_player_stats(
        &self,
        query: PlayerStatsQuery,
    ) -> GatewayResult<Vec<PlayerRecord>> {
        self.inner.get_player_stats(query).await
    }

    async fn list_player_names(&self, query: PlayerListQuery) -> GatewayResult<Vec<String>> {
        self.inner.list_player_names(query).await
    }

    async fn list_teams(&self, query: TeamListQuery) -> GatewayResult<Vec<String>> {
        self.inner.list_teams(query).await
    }

    async fn list_seasons(&self, player_type: Option<PlayerType>) -> GatewayResult<Vec<i32>> {
        self.inner.list_seasons(player_type).await
    }
}

impl<G> AnalysisReader for CachedGateway<G>
where
    G: AnalysisReader,
{
    async fn get_analysis(&self, id: AnalysisId) -> GatewayResult<AnalysisResponse> {
        self.inner.get_analysis(id).await
    }
}

impl<G> AnalysisWriter for CachedGateway<G>
where
    G: AnalysisWriter,
{
    async fn request_analysis(
        &self,
        request: AnalysisRequest,
    ) -> GatewayResult<AnalysisResponse> {
        self.inner.request_analysis(request).await
    }
}
