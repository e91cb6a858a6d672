//! Chart series and stat label helpers.
//!
//! Everything here is a pure function over stat lines. The output structs
//! serialize to the shape Chart.js expects, so a page can embed them as JSON.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::player::StatLine;

/// Extended colour palette.
pub const PALETTE: [&str; 8] = [
    "rgb(59, 130, 246)",
    "rgb(34, 197, 94)",
    "rgb(239, 68, 68)",
    "rgb(168, 85, 247)",
    "rgb(245, 158, 11)",
    "rgb(236, 72, 153)",
    "rgb(20, 184, 166)",
    "rgb(251, 146, 60)",
];

/// Number of palette entries cycled through for chart datasets.
const SERIES_COLORS: usize = 5;

const THREE_DECIMAL_STATS: [&str; 4] = [
    "batting_average",
    "on_base_percentage",
    "slugging_percentage",
    "ops",
];

const TWO_DECIMAL_STATS: [&str; 2] = ["era", "whip"];

/// Placeholder rendered for missing values.
pub const MISSING_STAT: &str = "-";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub fill: bool,
}

impl ChartDataset {
    fn new(label: String, data: Vec<f64>, index: usize) -> Self {
        let color = PALETTE[index % SERIES_COLORS];
        Self {
            label,
            data,
            background_color: translucent(color),
            border_color: color.to_string(),
            border_width: 2,
            fill: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty() || self.labels.is_empty()
    }
}

/// Display options for a line chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
}

impl ChartOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            x_axis_title: Some("시즌".to_string()),
            y_axis_title: None,
        }
    }

    /// Renders the Chart.js `options` object.
    pub fn to_json(&self) -> serde_json::Value {
        fn axis(title: &Option<String>) -> serde_json::Value {
            serde_json::json!({
                "display": true,
                "title": { "display": title.is_some(), "text": title },
            })
        }

        serde_json::json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "position": "top" },
                "title": { "display": self.title.is_some(), "text": self.title },
            },
            "scales": {
                "x": axis(&self.x_axis_title),
                "y": axis(&self.y_axis_title),
            },
            "interaction": { "mode": "nearest", "axis": "x", "intersect": false },
        })
    }
}

/// Builds one dataset per stat key over `stats`.
///
/// Labels default to each line's season in input order. Missing values are
/// charted as 0.
pub fn to_chart_series<S, K>(stats: &[S], keys: &[K], labels: Option<Vec<String>>) -> ChartData
where
    S: StatLine,
    K: AsRef<str>,
{
    let labels = labels
        .unwrap_or_else(|| stats.iter().map(|s| s.season().to_string()).collect());

    let datasets = keys
        .iter()
        .enumerate()
        .map(|(index, key)| {
            let key = key.as_ref();
            let data = stats.iter().map(|s| s.stat(key).unwrap_or(0.0)).collect();
            ChartDataset::new(stat_label(key).to_string(), data, index)
        })
        .collect();

    ChartData { labels, datasets }
}

/// Charts `key` for several players on a shared season axis.
///
/// The axis is the sorted union of every player's seasons; seasons a player
/// has no line for are charted as 0.
pub fn comparison_series<S: StatLine>(players: &[(&str, &[S])], key: &str) -> ChartData {
    let seasons: BTreeSet<i32> = players
        .iter()
        .flat_map(|(_, stats)| stats.iter().map(StatLine::season))
        .collect();

    let datasets = players
        .iter()
        .enumerate()
        .map(|(index, (name, stats))| {
            let data = seasons
                .iter()
                .map(|season| {
                    stats
                        .iter()
                        .find(|s| s.season() == *season)
                        .and_then(|s| s.stat(key))
                        .unwrap_or(0.0)
                })
                .collect();
            ChartDataset::new((*name).to_string(), data, index)
        })
        .collect();

    ChartData {
        labels: seasons.iter().map(i32::to_string).collect(),
        datasets,
    }
}

/// Human readable name of a stat key. Unknown keys are returned unchanged.
pub fn stat_label(key: &str) -> &str {
    match key {
        "batting_average" => "타율",
        "on_base_percentage" => "출루율",
        "slugging_percentage" => "장타율",
        "ops" => "OPS",
        "hits" => "안타",
        "home_runs" => "홈런",
        "rbi" => "타점",
        "runs" => "득점",
        "stolen_bases" => "도루",
        "strikeouts" => "삼진",
        "walks" => "볼넷",
        "games" => "경기수",
        "at_bats" => "타수",
        "doubles" => "2루타",
        "triples" => "3루타",
        "era" => "평균자책점",
        "whip" => "WHIP",
        "wins" => "승",
        "losses" => "패",
        "saves" => "세이브",
        "innings_pitched" => "이닝",
        "hits_allowed" => "피안타",
        "earned_runs" => "자책점",
        "home_runs_allowed" => "피홈런",
        "games_started" => "선발",
        "complete_games" => "완투",
        "shutouts" => "완봉",
        other => other,
    }
}

/// Number of decimals `key` is displayed with.
pub fn stat_precision(key: &str) -> usize {
    if THREE_DECIMAL_STATS.contains(&key) {
        3
    } else if TWO_DECIMAL_STATS.contains(&key) {
        2
    } else {
        0
    }
}

/// Formats a stat value for display.
///
/// Rate stats get three decimals, `era` and `whip` two, and counting stats
/// are rounded to an integer. Missing or non-finite values render as `-`.
pub fn format_stat(value: Option<f64>, key: &str) -> String {
    match value {
        Some(value) if value.is_finite() => round_half_up(value, stat_precision(key)),
        _ => MISSING_STAT.to_string(),
    }
}

/// `count` colours taken round robin from [`PALETTE`].
pub fn generate_colors(count: usize) -> Vec<&'static str> {
    PALETTE.iter().copied().cycle().take(count).collect()
}

/// `rgb(r, g, b)` with the `0x20` fill alpha applied.
fn translucent(color: &str) -> String {
    match color
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(channels) => format!("rgba({channels}, 0.125)"),
        None => color.to_string(),
    }
}

/// Rounds on the shortest decimal representation of `value`, so `0.3005`
/// becomes `0.301` although its binary value is slightly below the midpoint.
fn round_half_up(value: f64, places: usize) -> String {
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(places))
        .collect();

    if frac_part.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let int_len = digits.len() - places;
    let negative = value < 0.0 && digits.iter().any(|d| *d != b'0');

    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|d| char::from(*d)));
    if places > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|d| char::from(*d)));
    }
    out
}
