//! Search query controller.
//!
//! Owns the query of one search view, derives pagination from the last
//! loaded page, and coordinates fetches against a [`PlayerReader`].
//!
//! Every change of the query value bumps a generation counter. A fetch is
//! started with a [`FetchTicket`] that remembers the generation it was issued
//! for; completing a ticket whose generation is no longer current is a no-op,
//! so a slow response for an old query can never overwrite a newer page.

use crate::domain::search::{SearchQuery, SearchQueryUpdate, SearchResult};
use crate::gateway::PlayerReader;
use crate::gateway::errors::{GatewayError, GatewayResult};

/// Outcome of the most recent fetch for the current query.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState {
    /// Nothing loaded for the current query.
    #[default]
    Idle,
    Loaded(SearchResult),
    Failed(GatewayError),
}

/// Handle for one in-flight fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    query: SearchQuery,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Query the fetch must be issued with.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchController {
    query: SearchQuery,
    generation: u64,
    state: FetchState,
}

impl SearchController {
    /// Controller with the default query (`limit` 20, `offset` 0, no filters).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: SearchQuery) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn result(&self) -> Option<&SearchResult> {
        match &self.state {
            FetchState::Loaded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&GatewayError> {
        match &self.state {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// A fetch is only issued once at least one filter is set.
    pub fn is_enabled(&self) -> bool {
        self.query.has_filters()
    }

    /// Merges `update` into the query. Without an explicit offset the query
    /// goes back to the first page.
    pub fn update_query(&mut self, update: SearchQueryUpdate) {
        let mut next = self.query.clone();
        next.merge(update);
        self.replace_query(next);
    }

    /// Restores the default query and drops every filter.
    pub fn reset_query(&mut self) {
        self.replace_query(SearchQuery::default());
    }

    /// Advances one page when the loaded result has more items.
    pub fn next_page(&mut self) {
        if self.has_next_page() {
            let offset = self.query.offset.saturating_add(self.query.limit.get());
            self.update_query(SearchQueryUpdate::new().offset(offset));
        }
    }

    /// Goes back one page, never below offset 0.
    pub fn prev_page(&mut self) {
        if self.query.offset > 0 {
            let offset = self.query.offset.saturating_sub(self.query.limit.get());
            self.update_query(SearchQueryUpdate::new().offset(offset));
        }
    }

    /// Jumps to the 1-based `page`. Page 0 and pages whose offset does not
    /// fit in `usize` are ignored.
    pub fn go_to_page(&mut self, page: usize) {
        let Some(offset) = page
            .checked_sub(1)
            .and_then(|index| index.checked_mul(self.query.limit.get()))
        else {
            return;
        };
        self.update_query(SearchQueryUpdate::new().offset(offset));
    }

    pub fn has_next_page(&self) -> bool {
        self.result()
            .is_some_and(|result| {
                self.query.offset.saturating_add(self.query.limit.get()) < result.total
            })
    }

    pub fn has_prev_page(&self) -> bool {
        self.query.offset > 0
    }

    pub fn current_page(&self) -> usize {
        (self.query.offset / self.query.limit.get()).saturating_add(1)
    }

    /// Zero until a result is loaded.
    pub fn total_pages(&self) -> usize {
        self.result()
            .map_or(0, |result| result.total.div_ceil(self.query.limit.get()))
    }

    /// Starts a fetch for the current query, or returns `None` when the
    /// query has no filters.
    pub fn begin_fetch(&self) -> Option<FetchTicket> {
        if !self.is_enabled() {
            return None;
        }
        Some(FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Applies the outcome of `ticket`. Returns `false` when the ticket was
    /// issued for an older query and the outcome was dropped.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: GatewayResult<SearchResult>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping stale search response (generation {} < {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.state = match outcome {
            Ok(result) => FetchState::Loaded(result),
            Err(err) => {
                log::warn!("Player search failed: {err}");
                FetchState::Failed(err)
            }
        };
        true
    }

    /// Fetches the current query through `gateway`. Returns `true` when a
    /// request was issued and its outcome applied.
    pub async fn fetch<G>(&mut self, gateway: &G) -> bool
    where
        G: PlayerReader + ?Sized,
    {
        let Some(ticket) = self.begin_fetch() else {
            return false;
        };
        let outcome = gateway.search_players(ticket.query().clone()).await;
        self.complete_fetch(ticket, outcome)
    }

    /// Re-issues the last query, typically after a failure.
    pub async fn retry<G>(&mut self, gateway: &G) -> bool
    where
        G: PlayerReader + ?Sized,
    {
        self.fetch(gateway).await
    }

    fn replace_query(&mut self, next: SearchQuery) {
        if next == self.query {
            return;
        }
        self.query = next;
        self.generation += 1;
        self.state = FetchState::Idle;
    }
}
