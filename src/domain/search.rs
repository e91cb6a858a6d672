//! Search query and result types.

use serde::{Deserialize, Serialize};

use crate::domain::player::{PlayerRecord, PlayerType};
use crate::domain::types::PageLimit;

/// Filters and paging of a player search.
///
/// The full value doubles as the fetch key, so two equal queries always
/// describe the same backend request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-form player name search.
    #[serde(rename = "query", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_type: Option<PlayerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,
    #[serde(default)]
    pub limit: PageLimit,
    #[serde(default)]
    pub offset: usize,
}

impl SearchQuery {
    /// Returns `true` when at least one filter is set.
    pub fn has_filters(&self) -> bool {
        self.text.is_some()
            || self.player_type.is_some()
            || self.team.is_some()
            || self.season.is_some()
    }

    /// Applies a partial update. Without an explicit offset the query
    /// returns to the first page.
    pub fn merge(&mut self, update: SearchQueryUpdate) {
        update.text.apply(&mut self.text);
        update.player_type.apply(&mut self.player_type);
        update.team.apply(&mut self.team);
        update.season.apply(&mut self.season);
        if let Some(limit) = update.limit {
            self.limit = limit;
        }
        self.offset = update.offset.unwrap_or(0);
    }
}

/// Change to a single optional field of a [`SearchQuery`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the field untouched.
    #[default]
    Keep,
    Set(T),
    Clear,
}

impl<T> Patch<T> {
    fn apply(self, target: &mut Option<T>) {
        match self {
            Patch::Keep => {}
            Patch::Set(value) => *target = Some(value),
            Patch::Clear => *target = None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// `Some` sets the field, `None` clears it.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        }
    }
}

/// Partial update merged into the current query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQueryUpdate {
    pub text: Patch<String>,
    pub player_type: Patch<PlayerType>,
    pub team: Patch<String>,
    pub season: Patch<i32>,
    pub limit: Option<PageLimit>,
    pub offset: Option<usize>,
}

impl SearchQueryUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Patch::Set(text.into());
        self
    }

    pub fn player_type(mut self, player_type: PlayerType) -> Self {
        self.player_type = Patch::Set(player_type);
        self
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Patch::Set(team.into());
        self
    }

    pub fn season(mut self, season: i32) -> Self {
        self.season = Patch::Set(season);
        self
    }

    pub fn limit(mut self, limit: PageLimit) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// One page of search results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "results")]
    pub items: Vec<PlayerRecord>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

impl SearchResult {
    /// Empty page used when no fetch was issued.
    pub fn empty(query: &SearchQuery) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            offset: query.offset,
            limit: query.limit.get(),
        }
    }
}
