//! Game listing, event, and in-game statistics endpoints.

use std::collections::{BTreeMap, HashMap};

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::config::Config;
use crate::data_fetcher::api::fetch_utils::fetch;
use crate::data_fetcher::api::urls::{
    build_game_stats_url, build_game_url, build_games_url, build_schedule_url, build_shot_map_url,
};
use crate::data_fetcher::models::{GameResponse, GameStatsResponse};
use crate::data_fetcher::processors::{
    ColumnSpec, EVENT_GAME_COLUMNS, GAME_INFO_COLUMNS, GAMES_RESULTS_COLUMNS, GOAL_EVENT_COLUMNS,
    GOALIE_PERIOD_COLUMNS, PENALTY_EVENT_COLUMNS, PERIOD_PUCK_COLUMNS,
    PERIOD_TEAM_CONTEXT_COLUMNS, SKATER_PERIOD_COLUMNS, StatsTable, extract_path, parse_record,
    strip_composite_ids, strip_id_suffix,
};
use crate::data_fetcher::query::GameType;
use crate::error::AppError;

/// Fetches the finished and scheduled games of a season as the fixed
/// results projection, team ids stripped to their bare form.
#[instrument(skip(client, config))]
pub async fn fetch_games_results(
    client: &Client,
    config: &Config,
    season: i32,
    game_type: GameType,
) -> Result<StatsTable, AppError> {
    let url = build_games_url(&config.api_domain, season, game_type);
    let games: Vec<Value> = fetch(client, &url).await?;
    info!("Fetched {} games for season {season}", games.len());

    let mut records = Vec::with_capacity(games.len());
    for game in &games {
        let mut record = parse_record(game, GAMES_RESULTS_COLUMNS);
        strip_composite_ids(&mut record, &["homeTeamId", "awayTeamId"]);
        records.push(record);
    }
    Ok(StatsTable::from_projected(GAMES_RESULTS_COLUMNS, &records))
}

/// Fetches the schedule listing of a season, recursively flattened.
#[instrument(skip(client, config))]
pub async fn fetch_games_schedule(
    client: &Client,
    config: &Config,
    season: i32,
    game_type: GameType,
) -> Result<StatsTable, AppError> {
    let url = build_schedule_url(&config.api_domain, season, game_type);
    let games: Vec<Value> = fetch(client, &url).await?;
    Ok(StatsTable::from_flattened(&games))
}

/// Fetches every goal scored in a season, one row per goal event.
#[instrument(skip(client, config))]
pub async fn fetch_season_goal_events(
    client: &Client,
    config: &Config,
    season: i32,
    game_type: GameType,
) -> Result<StatsTable, AppError> {
    let url = build_games_url(&config.api_domain, season, game_type);
    let games: Vec<Value> = fetch(client, &url).await?;

    let mut rows = Vec::new();
    for game in &games {
        expand_goal_events(game, &mut rows);
    }
    info!("Expanded {} goal events from {} games", rows.len(), games.len());
    Ok(StatsTable::from_records(rows))
}

/// Fetches the goal events of a single game.
#[instrument(skip(client, config))]
pub async fn fetch_game_goal_events(
    client: &Client,
    config: &Config,
    season: i32,
    game_id: i32,
) -> Result<StatsTable, AppError> {
    let url = build_game_url(&config.api_domain, season, game_id);
    let response: GameResponse = fetch(client, &url).await?;

    let mut rows = Vec::new();
    expand_goal_events(&response.game, &mut rows);
    Ok(StatsTable::from_records(rows))
}

/// Fetches the penalty events of a single game.
#[instrument(skip(client, config))]
pub async fn fetch_game_penalty_events(
    client: &Client,
    config: &Config,
    season: i32,
    game_id: i32,
) -> Result<StatsTable, AppError> {
    let url = build_game_url(&config.api_domain, season, game_id);
    let response: GameResponse = fetch(client, &url).await?;

    let mut rows = Vec::new();
    expand_penalty_events(&response.game, &mut rows);
    Ok(StatsTable::from_records(rows))
}

/// Expands both sides' `goalEvents` into rows carrying the scorer
/// projection, null-padded assistant columns, the team side, and the game
/// context.
fn expand_goal_events(game: &Value, rows: &mut Vec<Map<String, Value>>) {
    let context = parse_record(game, EVENT_GAME_COLUMNS);
    let home_team_id = strip_id_suffix(&extract_path(game, "homeTeam.teamId"));
    let away_team_id = strip_id_suffix(&extract_path(game, "awayTeam.teamId"));

    for side in ["homeTeam", "awayTeam"] {
        let Some(events) = side_events(game, side, "goalEvents") else {
            continue;
        };
        for event in events {
            let mut row = parse_record(event, GOAL_EVENT_COLUMNS);
            push_assistants(event, &mut row);
            row.insert("homeTeamId".to_string(), home_team_id.clone());
            row.insert("awayTeamId".to_string(), away_team_id.clone());
            row.insert(
                "goalTeamSide".to_string(),
                Value::String(team_side(side).to_string()),
            );
            row.extend(context.clone());
            rows.push(row);
        }
    }
}

fn expand_penalty_events(game: &Value, rows: &mut Vec<Map<String, Value>>) {
    let context = parse_record(game, EVENT_GAME_COLUMNS);
    let home_team_id = strip_id_suffix(&extract_path(game, "homeTeam.teamId"));
    let away_team_id = strip_id_suffix(&extract_path(game, "awayTeam.teamId"));

    for side in ["homeTeam", "awayTeam"] {
        let Some(events) = side_events(game, side, "penaltyEvents") else {
            continue;
        };
        for event in events {
            let mut row = parse_record(event, PENALTY_EVENT_COLUMNS);
            row.insert("homeTeamId".to_string(), home_team_id.clone());
            row.insert("awayTeamId".to_string(), away_team_id.clone());
            row.insert(
                "penaltyTeamSide".to_string(),
                Value::String(team_side(side).to_string()),
            );
            row.extend(context.clone());
            rows.push(row);
        }
    }
}

fn side_events<'a>(game: &'a Value, side: &str, key: &str) -> Option<&'a Vec<Value>> {
    game.get(side)?.get(key)?.as_array()
}

fn team_side(side: &str) -> &'static str {
    if side == "homeTeam" { "home" } else { "away" }
}

/// The first two assistants become fixed columns; a goal with fewer
/// assistants gets nulls.
fn push_assistants(event: &Value, row: &mut Map<String, Value>) {
    let assistants = event.get("assistantPlayers").and_then(Value::as_array);
    for (index, label) in ["assistant1", "assistant2"].into_iter().enumerate() {
        let assistant = assistants.and_then(|list| list.get(index));
        for (field, suffix) in [
            ("playerId", "Id"),
            ("firstName", "FirstName"),
            ("lastName", "LastName"),
        ] {
            let value = assistant
                .and_then(|entry| entry.get(field))
                .cloned()
                .unwrap_or(Value::Null);
            row.insert(format!("{label}{suffix}"), value);
        }
    }
}

/// Fetches a single game's detail row.
#[instrument(skip(client, config))]
pub async fn fetch_game_info(
    client: &Client,
    config: &Config,
    season: i32,
    game_id: i32,
) -> Result<StatsTable, AppError> {
    let url = build_game_url(&config.api_domain, season, game_id);
    let response: Value = fetch(client, &url).await?;
    if response.get("game").is_none() {
        return Err(AppError::api_unexpected_structure(
            "Game detail response has no game object",
            url.as_str(),
        ));
    }

    let mut record = parse_record(&response, GAME_INFO_COLUMNS);
    strip_composite_ids(&mut record, &["homeTeamId", "awayTeamId"]);
    Ok(StatsTable::from_projected(GAME_INFO_COLUMNS, &[record]))
}

/// Fetches both rosters of a game, home side first, team ids stripped.
#[instrument(skip(client, config))]
pub async fn fetch_game_players(
    client: &Client,
    config: &Config,
    season: i32,
    game_id: i32,
) -> Result<StatsTable, AppError> {
    let url = build_game_url(&config.api_domain, season, game_id);
    let response: GameResponse = fetch(client, &url).await?;

    let players: Vec<Value> = response
        .home_team_players
        .iter()
        .chain(&response.away_team_players)
        .map(strip_team_id)
        .collect();
    Ok(StatsTable::from_flattened(&players))
}

/// Fetches the referees of a game. Games without the listing yield an
/// empty table.
#[instrument(skip(client, config))]
pub async fn fetch_game_referees(
    client: &Client,
    config: &Config,
    season: i32,
    game_id: i32,
) -> Result<StatsTable, AppError> {
    let url = build_game_url(&config.api_domain, season, game_id);
    let response: GameResponse = fetch(client, &url).await?;

    let referees = response
        .game
        .get("referees")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    Ok(StatsTable::from_flattened(&referees))
}

/// Fetches the post-game awards of a game, team ids stripped.
#[instrument(skip(client, config))]
pub async fn fetch_game_awards(
    client: &Client,
    config: &Config,
    season: i32,
    game_id: i32,
) -> Result<StatsTable, AppError> {
    let url = build_game_url(&config.api_domain, season, game_id);
    let response: GameResponse = fetch(client, &url).await?;

    let awards: Vec<Value> = response.awards.iter().map(strip_team_id).collect();
    Ok(StatsTable::from_flattened(&awards))
}

fn strip_team_id(record: &Value) -> Value {
    match record.as_object() {
        Some(map) => {
            let mut map = map.clone();
            strip_composite_ids(&mut map, &["teamId"]);
            Value::Object(map)
        }
        None => record.clone(),
    }
}

/// Fetches skater statistics of a game, per player-period or aggregated
/// per player.
#[instrument(skip(client, config))]
pub async fn fetch_skater_game_stats(
    client: &Client,
    config: &Config,
    season: i32,
    game_id: i32,
    summed: bool,
) -> Result<StatsTable, AppError> {
    let url = build_game_stats_url(&config.api_domain, season, game_id);
    let response: GameStatsResponse = fetch(client, &url).await?;

    let rows = collect_period_rows(&response, "periodPlayerStats", SKATER_PERIOD_COLUMNS);
    let rows = if summed { sum_player_periods(rows) } else { rows };
    Ok(StatsTable::from_records(rows))
}

/// Fetches goaltender statistics of a game, per player-period or
/// aggregated per player.
#[instrument(skip(client, config))]
pub async fn fetch_goalie_game_stats(
    client: &Client,
    config: &Config,
    season: i32,
    game_id: i32,
    summed: bool,
) -> Result<StatsTable, AppError> {
    let url = build_game_stats_url(&config.api_domain, season, game_id);
    let response: GameStatsResponse = fetch(client, &url).await?;

    let rows = collect_period_rows(&response, "goaliePeriodStats", GOALIE_PERIOD_COLUMNS);
    let rows = if summed { sum_player_periods(rows) } else { rows };
    Ok(StatsTable::from_records(rows))
}

/// Builds one row per player entry, ordered by the period each row reports
/// (home side first within a period).
///
/// Every row merges its side's team totals for that period and the
/// index-aligned `puckStats` entry. Rows are grouped by their own period
/// value rather than the entry's position, since overtime entries appear
/// wherever the upstream put them.
fn collect_period_rows(
    response: &GameStatsResponse,
    stats_key: &str,
    columns: &[ColumnSpec],
) -> Vec<Map<String, Value>> {
    let puck_periods: Vec<Map<String, Value>> = response
        .puck_stats
        .iter()
        .map(|period| parse_record(period, PERIOD_PUCK_COLUMNS))
        .collect();

    let mut by_period: BTreeMap<i64, Vec<Map<String, Value>>> = BTreeMap::new();
    let sides = [
        ("home", &response.home_team),
        ("away", &response.away_team),
    ];
    for (side, periods) in sides {
        for (index, entry) in periods.iter().enumerate() {
            let mut team_context = parse_record(entry, PERIOD_TEAM_CONTEXT_COLUMNS);
            strip_composite_ids(&mut team_context, &["teamId"]);
            let puck = puck_periods.get(index);

            let Some(players) = entry.get(stats_key).and_then(Value::as_array) else {
                continue;
            };
            for player in players {
                let mut row = parse_record(player, columns);
                row.extend(team_context.clone());
                if let Some(puck) = puck {
                    row.extend(puck.clone());
                }
                row.insert("teamSide".to_string(), Value::String(side.to_string()));

                let period = row.get("period").and_then(Value::as_i64).unwrap_or(0);
                by_period.entry(period).or_default().push(row);
            }
        }
    }
    by_period.into_values().flatten().collect()
}

/// Aggregates per-period rows into one row per player.
///
/// Identifier fields keep the first row's values and `period` keeps the
/// maximum seen. Numbers are summed, staying integral when both sides are.
/// Other non-null values overwrite, nulls never erase an earlier value.
/// Rows without a `playerId` are dropped and the result is sorted by
/// `playerId`.
fn sum_player_periods(rows: Vec<Map<String, Value>>) -> Vec<Map<String, Value>> {
    let mut totals: Vec<Map<String, Value>> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let Some(player_id) = row.get("playerId").filter(|id| !id.is_null()) else {
            continue;
        };
        let key = player_id.to_string();
        match slots.get(&key) {
            None => {
                slots.insert(key, totals.len());
                totals.push(row);
            }
            Some(&slot) => {
                let total = &mut totals[slot];
                for (field, value) in row {
                    merge_total_field(total, &field, value);
                }
            }
        }
    }

    totals.sort_by_key(|row| {
        row.get("playerId")
            .and_then(Value::as_i64)
            .unwrap_or(i64::MAX)
    });
    totals
}

fn merge_total_field(total: &mut Map<String, Value>, field: &str, value: Value) {
    if matches!(field, "playerId" | "jerseyId" | "teamId") {
        return;
    }
    if field == "period" {
        let highest = total
            .get(field)
            .and_then(Value::as_i64)
            .unwrap_or(0)
            .max(value.as_i64().unwrap_or(0));
        total.insert(field.to_string(), Value::from(highest));
        return;
    }
    if value.is_number() {
        let current = total.get(field).cloned().unwrap_or(Value::from(0));
        total.insert(field.to_string(), add_numbers(&current, &value));
    } else if !value.is_null() {
        total.insert(field.to_string(), value);
    }
}

fn add_numbers(a: &Value, b: &Value) -> Value {
    match (a.as_i64(), b.as_i64()) {
        (Some(a), Some(b)) => Value::from(a + b),
        _ => Value::from(a.as_f64().unwrap_or(0.0) + b.as_f64().unwrap_or(0.0)),
    }
}

/// Fetches the shot map of a game, flattened as-is.
#[instrument(skip(client, config))]
pub async fn fetch_shot_map(
    client: &Client,
    config: &Config,
    season: i32,
    game_id: i32,
) -> Result<StatsTable, AppError> {
    let url = build_shot_map_url(&config.api_domain, season, game_id);
    let response: Value = fetch(client, &url).await?;
    Ok(StatsTable::from_flattened(&shot_map_records(response)))
}

fn shot_map_records(response: Value) -> Vec<Value> {
    match response {
        Value::Array(shots) => shots,
        single => vec![single],
    }
}
