//! Player detail page query string.

use serde::Deserialize;
use validator::Validate;

use crate::domain::player::PlayerType;
use crate::domain::types::PlayerId;
use crate::forms::{FormError, non_blank};
use crate::gateway::PlayerStatsQuery;

/// Raw `/players/{id}` parameters.
///
/// `stat` may repeat, one entry per charted stat key, so the query string is
/// decoded with `serde_html_form`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PlayerStatsForm {
    pub player_type: String,
    #[serde(default)]
    #[validate(range(min = 1871, max = 2100))]
    pub season_start: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 1871, max = 2100))]
    pub season_end: Option<i32>,
    #[serde(default)]
    pub stat: Vec<String>,
}

/// Validated player detail request.
#[derive(Debug)]
pub struct PlayerStatsPayload {
    pub query: PlayerStatsQuery,
    /// Stat keys to chart, never empty.
    pub keys: Vec<String>,
}

impl PlayerStatsForm {
    /// Validates the form and binds it to the player from the path.
    pub fn into_payload(self, player_id: &str) -> Result<PlayerStatsPayload, FormError> {
        self.validate()?;

        let player_id = PlayerId::new(player_id).map_err(|_| FormError::InvalidPlayerId)?;
        let player_type = self
            .player_type
            .parse::<PlayerType>()
            .map_err(|_| FormError::InvalidPlayerType)?;

        if let (Some(start), Some(end)) = (self.season_start, self.season_end)
            && start > end
        {
            return Err(FormError::InvalidSeasonRange);
        }

        let keys = parse_stat_keys(self.stat, player_type)?;

        Ok(PlayerStatsPayload {
            query: PlayerStatsQuery::new(player_id, player_type)
                .seasons(self.season_start, self.season_end),
            keys,
        })
    }
}

/// Keeps the requested keys in order without duplicates, falling back to the
/// defaults of `player_type` when none were picked.
pub(crate) fn parse_stat_keys(
    raw: Vec<String>,
    player_type: PlayerType,
) -> Result<Vec<String>, FormError> {
    let mut keys: Vec<String> = Vec::new();
    for key in raw.into_iter().filter_map(|key| non_blank(Some(key))) {
        if !player_type.stat_keys().contains(&key.as_str()) {
            return Err(FormError::InvalidStatKey(key));
        }
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    if keys.is_empty() {
        keys = player_type
            .default_chart_keys()
            .iter()
            .map(|key| key.to_string())
            .collect();
    }
    Ok(keys)
}
