//! Two-player comparison query string.

use serde::Deserialize;
use validator::Validate;

use crate::domain::player::PlayerType;
use crate::domain::types::PlayerId;
use crate::forms::{FormError, non_blank};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CompareForm {
    #[serde(default)]
    pub player_type: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 64))]
    pub first: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 64))]
    pub second: String,
    #[serde(default)]
    pub stat: Option<String>,
    #[serde(default)]
    pub season_start: Option<i32>,
    #[serde(default)]
    pub season_end: Option<i32>,
}

impl CompareForm {
    /// An untouched form renders the empty comparison page.
    pub fn is_blank(&self) -> bool {
        self.first.trim().is_empty() && self.second.trim().is_empty()
    }
}

#[derive(Debug)]
pub struct ComparePayload {
    pub player_type: PlayerType,
    pub first: PlayerId,
    pub second: PlayerId,
    pub key: String,
    pub season_start: Option<i32>,
    pub season_end: Option<i32>,
}

impl TryFrom<CompareForm> for ComparePayload {
    type Error = FormError;

    fn try_from(form: CompareForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let player_type = form
            .player_type
            .parse::<PlayerType>()
            .map_err(|_| FormError::InvalidPlayerType)?;
        let first = PlayerId::new(form.first).map_err(|_| FormError::InvalidPlayerId)?;
        let second = PlayerId::new(form.second).map_err(|_| FormError::InvalidPlayerId)?;

        let key = match non_blank(form.stat) {
            Some(key) if player_type.stat_keys().contains(&key.as_str()) => key,
            Some(key) => return Err(FormError::InvalidStatKey(key)),
            None => player_type.default_chart_keys()[0].to_string(),
        };

        if let (Some(start), Some(end)) = (form.season_start, form.season_end)
            && start > end
        {
            return Err(FormError::InvalidSeasonRange);
        }

        Ok(Self {
            player_type,
            first,
            second,
            key,
            season_start: form.season_start,
            season_end: form.season_end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_chart_key() {
        let form: CompareForm =
            serde_html_form::from_str("player_type=pitcher&first=colege01&second=verlaju01")
                .expect("valid query");

        let payload = ComparePayload::try_from(form).expect("valid payload");

        assert_eq!(payload.key, "era");
        assert_eq!(payload.first.as_str(), "colege01");
        assert_eq!(payload.second.as_str(), "verlaju01");
    }

    #[test]
    fn missing_player_fails_validation() {
        let form = CompareForm {
            player_type: "batter".into(),
            first: "judgeaa01".into(),
            ..CompareForm::default()
        };

        assert!(!form.is_blank());
        assert!(matches!(
            ComparePayload::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn unknown_stat_is_rejected() {
        let form = CompareForm {
            player_type: "batter".into(),
            first: "a".into(),
            second: "b".into(),
            stat: Some("war".into()),
            ..CompareForm::default()
        };

        assert!(matches!(
            ComparePayload::try_from(form),
            Err(FormError::InvalidStatKey(_))
        ));
    }
}
