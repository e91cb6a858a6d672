//! Player records returned by the backend.
//!
//! A record is either a batter or a pitcher stat line. The backend tags the
//! record with `player_type`, which is mapped onto the [`PlayerStats`] sum type
//! so callers match on the variant instead of inspecting the tag.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Kind of player a record or query refers to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    Batter,
    Pitcher,
}

impl PlayerType {
    /// Wire representation used by the backend.
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerType::Batter => "batter",
            PlayerType::Pitcher => "pitcher",
        }
    }

    /// Stat keys charted when the user did not pick any.
    pub const fn default_chart_keys(self) -> &'static [&'static str] {
        match self {
            PlayerType::Batter => &["batting_average", "on_base_percentage", "ops"],
            PlayerType::Pitcher => &["era", "whip"],
        }
    }

    /// All stat keys available for this kind of player.
    pub const fn stat_keys(self) -> &'static [&'static str] {
        match self {
            PlayerType::Batter => BatterStats::KEYS,
            PlayerType::Pitcher => PitcherStats::KEYS,
        }
    }
}

impl Display for PlayerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "batter" => Ok(PlayerType::Batter),
            "pitcher" => Ok(PlayerType::Pitcher),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown player type `{other}`"
            ))),
        }
    }
}

/// Read access to one season's numeric stat columns.
pub trait StatLine {
    fn season(&self) -> i32;

    /// Returns the value of the stat column named `key`, if present.
    fn stat(&self, key: &str) -> Option<f64>;
}

macro_rules! stat_table {
    ($(#[$meta:meta])* $name:ident { $($field:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
        pub struct $name {
            pub season: i32,
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<f64>,
            )+
        }

        impl $name {
            /// Stat keys in declaration order.
            pub const KEYS: &'static [&'static str] = &[$(stringify!($field)),+];
        }

        impl StatLine for $name {
            fn season(&self) -> i32 {
                self.season
            }

            fn stat(&self, key: &str) -> Option<f64> {
                match key {
                    $(stringify!($field) => self.$field,)+
                    _ => None,
                }
            }
        }
    };
}

stat_table!(
    /// Season stat line of a batter.
    BatterStats {
        batting_average,
        on_base_percentage,
        slugging_percentage,
        ops,
        hits,
        home_runs,
        rbi,
        runs,
        stolen_bases,
        strikeouts,
        walks,
        games,
        at_bats,
        doubles,
        triples,
    }
);

stat_table!(
    /// Season stat line of a pitcher.
    PitcherStats {
        era,
        whip,
        wins,
        losses,
        saves,
        strikeouts,
        walks,
        innings_pitched,
        hits_allowed,
        earned_runs,
        home_runs_allowed,
        games,
        games_started,
        complete_games,
        shutouts,
    }
);

/// Stats attached to a [`PlayerRecord`], keyed by player type.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerStats {
    Batter(BatterStats),
    Pitcher(PitcherStats),
}

impl PlayerStats {
    pub fn player_type(&self) -> PlayerType {
        match self {
            PlayerStats::Batter(_) => PlayerType::Batter,
            PlayerStats::Pitcher(_) => PlayerType::Pitcher,
        }
    }
}

impl StatLine for PlayerStats {
    fn season(&self) -> i32 {
        match self {
            PlayerStats::Batter(stats) => stats.season,
            PlayerStats::Pitcher(stats) => stats.season,
        }
    }

    fn stat(&self, key: &str) -> Option<f64> {
        match self {
            PlayerStats::Batter(stats) => stats.stat(key),
            PlayerStats::Pitcher(stats) => stats.stat(key),
        }
    }
}

/// One season-team-player stat line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlayerRecordWire", into = "PlayerRecordWire")]
pub struct PlayerRecord {
    pub player_id: Option<String>,
    pub name: String,
    pub team: String,
    pub season: i32,
    pub stats: PlayerStats,
}

impl PlayerRecord {
    pub fn player_type(&self) -> PlayerType {
        self.stats.player_type()
    }
}

impl StatLine for PlayerRecord {
    fn season(&self) -> i32 {
        self.season
    }

    fn stat(&self, key: &str) -> Option<f64> {
        self.stats.stat(key)
    }
}

/// Backend representation: the record tag sits next to the shared fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "player_type", rename_all = "lowercase")]
enum PlayerRecordWire {
    Batter {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        player_id: Option<String>,
        player_name: String,
        #[serde(default)]
        team: Option<String>,
        season: i32,
        stats: BatterStats,
    },
    Pitcher {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        player_id: Option<String>,
        player_name: String,
        #[serde(default)]
        team: Option<String>,
        season: i32,
        stats: PitcherStats,
    },
}

impl From<PlayerRecordWire> for PlayerRecord {
    fn from(wire: PlayerRecordWire) -> Self {
        match wire {
            PlayerRecordWire::Batter {
                player_id,
                player_name,
                team,
                season,
                stats,
            } => PlayerRecord {
                player_id,
                name: player_name,
                team: team.unwrap_or_default(),
                season,
                stats: PlayerStats::Batter(stats),
            },
            PlayerRecordWire::Pitcher {
                player_id,
                player_name,
                team,
                season,
                stats,
            } => PlayerRecord {
                player_id,
                name: player_name,
                team: team.unwrap_or_default(),
                season,
                stats: PlayerStats::Pitcher(stats),
            },
        }
    }
}

impl From<PlayerRecord> for PlayerRecordWire {
    fn from(record: PlayerRecord) -> Self {
        let team = Some(record.team).filter(|team| !team.is_empty());
        match record.stats {
            PlayerStats::Batter(stats) => PlayerRecordWire::Batter {
                player_id: record.player_id,
                player_name: record.name,
                team,
                season: record.season,
                stats,
            },
            PlayerStats::Pitcher(stats) => PlayerRecordWire::Pitcher {
                player_id: record.player_id,
                player_name: record.name,
                team,
                season: record.season,
                stats,
            },
        }
    }
}
