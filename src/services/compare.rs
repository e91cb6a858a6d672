//! Two-player comparison workflow.

use crate::charts::{ChartOptions, comparison_series, format_stat, stat_label};
use crate::domain::player::{PlayerRecord, PlayerType, StatLine};
use crate::domain::types::PlayerId;
use crate::dto::compare::{ComparePageData, ComparedPlayer, Comparison};
use crate::dto::players::StatColumn;
use crate::forms::compare::{CompareForm, ComparePayload};
use crate::gateway::{PlayerReader, PlayerStatsQuery};
use crate::services::{ServiceError, ServiceResult};

/// Renders the comparison page. A blank form yields the empty page; anything
/// else must name two players of one type.
pub async fn load_comparison<G>(gateway: &G, form: CompareForm) -> ServiceResult<ComparePageData>
where
    G: PlayerReader + ?Sized,
{
    let mut page = ComparePageData {
        player_type: form.player_type.clone(),
        first: form.first.clone(),
        second: form.second.clone(),
        batter_stats: StatColumn::all(PlayerType::Batter),
        pitcher_stats: StatColumn::all(PlayerType::Pitcher),
        comparison: None,
    };

    if form.is_blank() {
        return Ok(page);
    }

    let payload = ComparePayload::try_from(form)?;
    let first = fetch_series(gateway, &payload, &payload.first).await?;
    let second = fetch_series(gateway, &payload, &payload.second).await?;

    let chart = comparison_series(
        &[(first[0].name.as_str(), &first[..]), (second[0].name.as_str(), &second[..])],
        &payload.key,
    );
    let label = stat_label(&payload.key).to_string();
    let chart_options = ChartOptions::titled(label.clone()).to_json();
    let players = vec![
        compared_player(&payload.first, &first, &payload.key),
        compared_player(&payload.second, &second, &payload.key),
    ];

    page.comparison = Some(Comparison {
        key: payload.key,
        label,
        chart,
        chart_options,
        players,
    });
    Ok(page)
}

async fn fetch_series<G>(
    gateway: &G,
    payload: &ComparePayload,
    player_id: &PlayerId,
) -> ServiceResult<Vec<PlayerRecord>>
where
    G: PlayerReader + ?Sized,
{
    let query = PlayerStatsQuery::new(player_id.clone(), payload.player_type)
        .seasons(payload.season_start, payload.season_end);

    let mut records = gateway.get_player_stats(query).await.map_err(|err| {
        log::error!("Failed to load stats of player {player_id}: {err}");
        err
    })?;

    records.retain(|record| record.player_type() == payload.player_type);
    if records.is_empty() {
        return Err(ServiceError::NotFound);
    }
    records.sort_by_key(|record| record.season);
    Ok(records)
}

fn compared_player(player_id: &PlayerId, records: &[PlayerRecord], key: &str) -> ComparedPlayer {
    let values: Vec<f64> = records.iter().filter_map(|record| record.stat(key)).collect();
    let average = if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    };

    ComparedPlayer {
        player_id: player_id.to_string(),
        name: records[0].name.clone(),
        seasons: records.len(),
        average: format_stat(average, key),
    }
}
