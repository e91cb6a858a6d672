//! Search page query string.

use serde::Deserialize;

use crate::domain::player::PlayerType;
use crate::domain::search::{Patch, SearchQueryUpdate};
use crate::domain::types::PageLimit;
use crate::forms::{FormError, non_blank, parse_season};

/// Raw `/search` parameters. Every filter is optional; blank values mean
/// "any".
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub player_type: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<usize>,
}

/// Validated search input, ready to be applied to a controller.
#[derive(Debug)]
pub struct SearchPayload {
    pub update: SearchQueryUpdate,
    pub page: usize,
}

impl TryFrom<SearchForm> for SearchPayload {
    type Error = FormError;

    fn try_from(form: SearchForm) -> Result<Self, Self::Error> {
        let player_type = non_blank(form.player_type)
            .map(|raw| raw.parse::<PlayerType>())
            .transpose()
            .map_err(|_| FormError::InvalidPlayerType)?;

        let limit = form
            .limit
            .map(PageLimit::new)
            .transpose()
            .map_err(|_| FormError::InvalidLimit)?;

        let page = form.page.unwrap_or(1).max(1);
        let page_size = limit.unwrap_or_default().get();
        if (page - 1).checked_mul(page_size).is_none() {
            return Err(FormError::InvalidPage);
        }

        let update = SearchQueryUpdate {
            text: non_blank(form.query).into(),
            player_type: player_type.into(),
            team: non_blank(form.team).into(),
            season: Patch::from(parse_season(form.season)?),
            limit,
            offset: None,
        };

        Ok(Self { update, page })
    }
}
