//! Player statistics endpoints.

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::config::Config;
use crate::data_fetcher::api::fetch_utils::fetch;
use crate::data_fetcher::api::urls::{
    build_player_game_log_url, build_player_info_url, build_player_stats_url,
};
use crate::data_fetcher::models::GameLogResponse;
use crate::data_fetcher::processors::{
    PLAYER_GAME_LOG_COLUMNS, PLAYER_PROFILE_COLUMNS, PLAYER_TEAMS_COLUMNS, StatsTable, parse_record,
};
use crate::data_fetcher::query::{GameLogQuery, GameLogType, PlayerStatsQuery, PlayerStatsType};
use crate::error::AppError;

/// Fetches one data type of summed player statistics.
///
/// Validation runs before any request is made, so an invalid query never
/// touches the network. The wire request always pins the summed path
/// segment to false and asks for split teams: that one response carries
/// both the per-player aggregates (its top-level records) and the per-team
/// breakdown (their `previousTeamsForTournament` entries), and the query's
/// summed flag selects which rows are kept.
#[instrument(skip(client, config))]
pub async fn fetch_player_stats(
    client: &Client,
    config: &Config,
    query: &PlayerStatsQuery,
) -> Result<StatsTable, AppError> {
    query.validate()?;

    let url = build_player_stats_url(
        &config.api_domain,
        query.start_season,
        query.end_season,
        query.game_type,
        false,
        query.team_id.as_deref(),
        query.data_type,
    );
    let records: Vec<Value> = fetch(client, &url).await?;
    info!(
        "Fetched {} player records for dataType={}",
        records.len(),
        query.data_type
    );

    let rows = select_player_rows(records, query.summed, query.data_type);
    Ok(StatsTable::project(&rows, query.data_type.columns()))
}

/// Applies the aggregation mode to the fetched records.
///
/// Aggregate rows pass through when summing. Otherwise each row expands to
/// its per-team split entries, falling back to the aggregate itself for a
/// player who appeared for a single team. The historical `all` listing has
/// no per-team split and always passes through.
fn select_player_rows(
    records: Vec<Value>,
    summed: bool,
    data_type: PlayerStatsType,
) -> Vec<Value> {
    if summed || matches!(data_type, PlayerStatsType::All) {
        return records;
    }

    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let split = record
            .get("previousTeamsForTournament")
            .and_then(Value::as_array)
            .filter(|teams| !teams.is_empty())
            .cloned();
        match split {
            Some(teams) => rows.extend(teams),
            None => rows.push(record),
        }
    }
    rows
}

/// Fetches several player data types for the same query concurrently.
///
/// One request per data type, joined over the shared client so the
/// connection pool is reused. Tables come back paired with their data type
/// in input order; the first failure wins.
#[instrument(skip(client, config))]
pub async fn fetch_player_stats_multi(
    client: &Client,
    config: &Config,
    query: &PlayerStatsQuery,
    data_types: &[PlayerStatsType],
) -> Result<Vec<(PlayerStatsType, StatsTable)>, AppError> {
    let fetches = data_types.iter().map(|&data_type| {
        let mut query = query.clone();
        query.data_type = data_type;
        async move {
            let table = fetch_player_stats(client, config, &query).await?;
            Ok::<_, AppError>((data_type, table))
        }
    });
    futures::future::try_join_all(fetches).await
}

/// Fetches a player's per-game rows for one season.
///
/// A concrete game type must be present in the response: the upstream
/// signals "no such games" by omitting the key, which surfaces as a decode
/// error naming the keys that were present. [`GameLogType::All`]
/// concatenates every key's games. Each row carries a `gameType` column
/// naming the response key it came from.
#[instrument(skip(client, config))]
pub async fn fetch_player_game_log(
    client: &Client,
    config: &Config,
    query: &GameLogQuery,
) -> Result<StatsTable, AppError> {
    let url = build_player_game_log_url(&config.api_domain, query.player_id, query.season);
    let response: GameLogResponse = fetch(client, &url).await?;

    let mut rows = Vec::new();
    match query.game_type.response_key() {
        Some(key) => {
            let games = response.get(key).ok_or_else(|| {
                AppError::api_unexpected_structure(
                    format!(
                        "Game type '{key}' not available; response has: {}",
                        response.keys().cloned().collect::<Vec<_>>().join(", ")
                    ),
                    url.as_str(),
                )
            })?;
            collect_game_log_rows(key, games, &mut rows);
        }
        None => {
            for (key, games) in &response {
                collect_game_log_rows(key, games, &mut rows);
            }
        }
    }
    info!("Collected {} game log rows", rows.len());

    Ok(StatsTable::project(&rows, PLAYER_GAME_LOG_COLUMNS))
}

fn collect_game_log_rows(game_type: &str, games: &[Value], rows: &mut Vec<Value>) {
    for game in games {
        let mut record = game.as_object().cloned().unwrap_or_default();
        record.insert(
            "gameType".to_string(),
            Value::String(game_type.to_string()),
        );
        rows.push(Value::Object(record));
    }
}

/// Fetches a player's profile as a single-row table.
#[instrument(skip(client, config))]
pub async fn fetch_player_profile(
    client: &Client,
    config: &Config,
    player_id: i64,
) -> Result<StatsTable, AppError> {
    let url = build_player_info_url(&config.api_domain, player_id);
    let info: Value = fetch(client, &url).await?;
    Ok(StatsTable::project(&[info], PLAYER_PROFILE_COLUMNS))
}

/// Fetches the seasons a player has appeared in.
#[instrument(skip(client, config))]
pub async fn fetch_player_active_seasons(
    client: &Client,
    config: &Config,
    player_id: i64,
) -> Result<Vec<i32>, AppError> {
    let url = build_player_info_url(&config.api_domain, player_id);
    let info: Value = fetch(client, &url).await?;
    let seasons = info
        .get("activeSeasons")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            AppError::api_unexpected_structure(
                "Player info has no activeSeasons list",
                url.as_str(),
            )
        })?;
    Ok(seasons
        .iter()
        .filter_map(Value::as_i64)
        .map(|season| season as i32)
        .collect())
}

/// Fetches the teams a player has played for, one row per season entry.
#[instrument(skip(client, config))]
pub async fn fetch_player_teams(
    client: &Client,
    config: &Config,
    player_id: i64,
) -> Result<StatsTable, AppError> {
    let url = build_player_info_url(&config.api_domain, player_id);
    let info: Value = fetch(client, &url).await?;
    let teams: Vec<Value> = match info.get("teams").and_then(Value::as_object) {
        Some(map) => map.values().cloned().collect(),
        None => Vec::new(),
    };
    Ok(StatsTable::project(&teams, PLAYER_TEAMS_COLUMNS))
}

/// Fetches a player's per-season statistics from the historical section.
///
/// With [`GameLogType::All`], rows from every game type are combined and
/// sorted by (season, gameType) descending. A single game type whose key
/// is absent yields an empty table: unlike the game log, the upstream
/// keeps no entry at all for game types without history.
#[instrument(skip(client, config))]
pub async fn fetch_player_season_stats(
    client: &Client,
    config: &Config,
    player_id: i64,
    game_type: GameLogType,
) -> Result<StatsTable, AppError> {
    let url = build_player_info_url(&config.api_domain, player_id);
    let info: Value = fetch(client, &url).await?;
    let empty = Map::new();
    let historical = info
        .get("historical")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let mut rows: Vec<Map<String, Value>> = Vec::new();
    match game_type.response_key() {
        Some(key) => {
            if let Some(seasons) = historical.get(key).and_then(Value::as_array) {
                for season in seasons {
                    rows.push(season_stat_row(key, season));
                }
            }
        }
        None => {
            for (key, seasons) in historical {
                if let Some(seasons) = seasons.as_array() {
                    for season in seasons {
                        rows.push(season_stat_row(key, season));
                    }
                }
            }
            rows.sort_by(|a, b| {
                (season_of(b), game_type_of(b)).cmp(&(season_of(a), game_type_of(a)))
            });
        }
    }

    Ok(StatsTable::from_records(rows))
}

fn season_stat_row(game_type: &str, season: &Value) -> Map<String, Value> {
    let mut record = season.as_object().cloned().unwrap_or_default();
    record.insert(
        "gameType".to_string(),
        Value::String(game_type.to_string()),
    );
    record
}

fn season_of(record: &Map<String, Value>) -> i64 {
    record.get("season").and_then(Value::as_i64).unwrap_or(0)
}

fn game_type_of(record: &Map<String, Value>) -> String {
    record
        .get("gameType")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn split_record(player_id: i64, teams: Value) -> Value {
        json!({
            "playerId": player_id,
            "firstName": "Testi",
            "lastName": "Pelaaja",
            "games": 60,
            "previousTeamsForTournament": teams
        })
    }

    #[test]
    fn test_select_player_rows_summed_passes_aggregates_through() {
        let records = vec![split_record(1, json!([{ "playerId": 1 }]))];
        let rows = select_player_rows(records.clone(), true, PlayerStatsType::BasicStats);
        assert_eq!(rows, records);
    }

    #[test]
    fn test_select_player_rows_split_expands_per_team_entries() {
        let records = vec![split_record(
            1,
            json!([
                { "playerId": 1, "team": { "id": "hifk" } },
                { "playerId": 1, "team": { "id": "tps" } }
            ]),
        )];
        let rows = select_player_rows(records, false, PlayerStatsType::BasicStats);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["team"]["id"], json!("hifk"));
        assert_eq!(rows[1]["team"]["id"], json!("tps"));
    }

    #[test]
    fn test_select_player_rows_split_falls_back_to_aggregate() {
        // One-team players carry no split entries.
        let records = vec![
            split_record(1, json!([])),
            json!({ "playerId": 2, "games": 10 }),
        ];
        let rows = select_player_rows(records, false, PlayerStatsType::BasicStats);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["playerId"], json!(1));
        assert_eq!(rows[1]["playerId"], json!(2));
    }

    #[test]
    fn test_select_player_rows_all_listing_never_splits() {
        let records = vec![split_record(1, json!([{ "playerId": 1 }]))];
        let rows = select_player_rows(records.clone(), false, PlayerStatsType::All);
        assert_eq!(rows, records);
    }

    #[test]
    fn test_collect_game_log_rows_injects_game_type() {
        let games = vec![json!({ "gameId": 100, "goals": 1 })];
        let mut rows = Vec::new();
        collect_game_log_rows("playoffs", &games, &mut rows);
        assert_eq!(rows[0]["gameType"], json!("playoffs"));
        assert_eq!(rows[0]["gameId"], json!(100));
    }

    #[test]
    fn test_season_stat_rows_sort_descending() {
        let mut rows = vec![
            season_stat_row("playoffs", &json!({ "season": 2023 })),
            season_stat_row("regular", &json!({ "season": 2024 })),
            season_stat_row("playoffs", &json!({ "season": 2024 })),
        ];
        rows.sort_by(|a, b| (season_of(b), game_type_of(b)).cmp(&(season_of(a), game_type_of(a))));

        let order: Vec<(i64, String)> = rows
            .iter()
            .map(|r| (season_of(r), game_type_of(r)))
            .collect();
        assert_eq!(
            order,
            vec![
                (2024, "regular".to_string()),
                (2024, "playoffs".to_string()),
                (2023, "playoffs".to_string()),
            ]
        );
    }
}
