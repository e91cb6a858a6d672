//! Player detail workflow: time series chart and season table.

use crate::charts::{ChartOptions, format_stat, to_chart_series};
use crate::domain::player::{PlayerRecord, StatLine};
use crate::dto::players::{PlayerStatsPageData, StatColumn, StatTableRow};
use crate::forms::players::PlayerStatsPayload;
use crate::gateway::PlayerReader;
use crate::services::{ServiceError, ServiceResult};

/// Fetches a player's seasons and shapes the chart and table.
pub async fn load_player_stats<G>(
    gateway: &G,
    payload: PlayerStatsPayload,
) -> ServiceResult<PlayerStatsPageData>
where
    G: PlayerReader + ?Sized,
{
    let PlayerStatsPayload { query, keys } = payload;
    let player_id = query.player_id.to_string();
    let player_type = query.player_type;
    let (season_start, season_end) = (query.season_start, query.season_end);

    let mut records = gateway.get_player_stats(query).await.map_err(|err| {
        log::error!("Failed to load stats of player {player_id}: {err}");
        err
    })?;

    records.retain(|record| record.player_type() == player_type);
    if records.is_empty() {
        return Err(ServiceError::NotFound);
    }
    records.sort_by_key(|record| record.season);

    let name = records[0].name.clone();
    let chart = to_chart_series(&records, &keys, None);
    let chart_options = ChartOptions::titled(format!("{name} 시즌별 기록")).to_json();

    let columns: Vec<StatColumn> = player_type
        .stat_keys()
        .iter()
        .filter(|key| records.iter().any(|record| record.stat(key).is_some()))
        .map(|key| StatColumn::new(key))
        .collect();
    let rows = records.iter().map(|record| table_row(record, &columns)).collect();

    Ok(PlayerStatsPageData {
        player_id,
        name,
        player_type,
        season_start,
        season_end,
        selected: keys,
        available: StatColumn::all(player_type),
        chart,
        chart_options,
        columns,
        rows,
    })
}

fn table_row(record: &PlayerRecord, columns: &[StatColumn]) -> StatTableRow {
    StatTableRow {
        season: record.season,
        team: record.team.clone(),
        values: columns
            .iter()
            .map(|column| format_stat(record.stat(&column.key), &column.key))
            .collect(),
    }
}
