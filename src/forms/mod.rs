//! Form definitions backing the page routes.
//!
//! Forms mirror the raw query or body of a request. Each converts into a
//! typed payload with `TryFrom`, which is where user input gets rejected.

use thiserror::Error;
use validator::ValidationErrors;

pub mod analysis;
pub mod compare;
pub mod players;
pub mod search;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid player type")]
    InvalidPlayerType,

    #[error("invalid season")]
    InvalidSeason,

    #[error("season range is reversed")]
    InvalidSeasonRange,

    #[error("invalid page size")]
    InvalidLimit,

    #[error("page is out of range")]
    InvalidPage,

    #[error("invalid player id")]
    InvalidPlayerId,

    #[error("invalid player name")]
    InvalidPlayerName,

    #[error("unknown stat `{0}`")]
    InvalidStatKey(String),

    #[error("comparison player is required")]
    MissingComparisonPlayer,
}

/// Treats blank inputs (e.g. the "any" option of a select) as unset.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn parse_season(value: Option<String>) -> Result<Option<i32>, FormError> {
    non_blank(value)
        .map(|v| v.parse::<i32>().map_err(|_| FormError::InvalidSeason))
        .transpose()
}
