//! Team statistics endpoints.

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::config::Config;
use crate::constants::seasons::FIRST_SEASON;
use crate::data_fetcher::api::fetch_utils::fetch;
use crate::data_fetcher::api::urls::{
    build_rosters_url, build_standings_url, build_team_stats_url, build_teams_info_url,
};
use crate::data_fetcher::models::{StandingsResponse, TeamStatsResponse, TeamsInfoResponse};
use crate::data_fetcher::processors::{StatsTable, TEAMS_INFO_COLUMNS};
use crate::data_fetcher::query::{
    GameType, STATS_GAME_TYPES, TeamStatsQuery, TeamStatsType, current_season,
    validate_game_type, validate_season_range,
};
use crate::error::AppError;

/// Fetches one data type of team statistics over a season range.
///
/// The records nest a `statistics` object whose shape varies by data type,
/// so rows are flattened recursively rather than projected by a fixed
/// column table.
#[instrument(skip(client, config))]
pub async fn fetch_team_stats(
    client: &Client,
    config: &Config,
    query: &TeamStatsQuery,
) -> Result<StatsTable, AppError> {
    query.validate()?;

    let url = build_team_stats_url(
        &config.api_domain,
        query.start_season,
        query.end_season,
        query.game_type,
        query.data_type,
    );
    let response: TeamStatsResponse = fetch(client, &url).await?;
    info!(
        "Fetched {} team records for dataType={}",
        response.team_stats.len(),
        query.data_type
    );
    Ok(StatsTable::from_flattened(&response.team_stats))
}

/// Fetches all-time standings, covering every season the league has played.
#[instrument(skip(client, config))]
pub async fn fetch_team_stats_all_time(
    client: &Client,
    config: &Config,
    game_type: GameType,
) -> Result<StatsTable, AppError> {
    let query = TeamStatsQuery::new(
        FIRST_SEASON,
        current_season(),
        game_type,
        TeamStatsType::Standings,
    );
    fetch_team_stats(client, config, &query).await
}

/// Fetches the team directory, one row per team.
#[instrument(skip(client, config))]
pub async fn fetch_teams_info(client: &Client, config: &Config) -> Result<StatsTable, AppError> {
    let url = build_teams_info_url(&config.api_domain);
    let response: TeamsInfoResponse = fetch(client, &url).await?;
    let teams: Vec<Value> = response.teams.values().cloned().collect();
    Ok(StatsTable::project(&teams, TEAMS_INFO_COLUMNS))
}

/// Fetches every team's per-tournament season statistics.
///
/// The team directory nests these under each team's `teamtournamentstats`
/// list. Teams without the list contribute no rows.
#[instrument(skip(client, config))]
pub async fn fetch_team_season_stats(
    client: &Client,
    config: &Config,
) -> Result<StatsTable, AppError> {
    let url = build_teams_info_url(&config.api_domain);
    let response: TeamsInfoResponse = fetch(client, &url).await?;
    let rows = tournament_stat_rows(&response.teams);
    info!("Collected {} team season stat rows", rows.len());
    Ok(StatsTable::from_flattened(&rows))
}

fn tournament_stat_rows(teams: &Map<String, Value>) -> Vec<Value> {
    let mut rows = Vec::new();
    for team in teams.values() {
        if let Some(stats) = team.get("teamtournamentstats").and_then(Value::as_array) {
            rows.extend(stats.iter().cloned());
        }
    }
    rows
}

/// Fetches the rosters of a season range, one row per player entry.
#[instrument(skip(client, config))]
pub async fn fetch_team_rosters(
    client: &Client,
    config: &Config,
    start_season: i32,
    end_season: i32,
    game_type: GameType,
    team_id: Option<&str>,
) -> Result<StatsTable, AppError> {
    validate_season_range(start_season, end_season)?;
    validate_game_type(game_type, STATS_GAME_TYPES)?;

    let url = build_rosters_url(
        &config.api_domain,
        start_season,
        end_season,
        game_type,
        team_id,
    );
    let players: Vec<Value> = fetch(client, &url).await?;
    info!("Fetched {} roster entries", players.len());
    Ok(StatsTable::from_flattened(&players))
}

/// Fetches the league table of one season.
#[instrument(skip(client, config))]
pub async fn fetch_standings(
    client: &Client,
    config: &Config,
    season: i32,
) -> Result<StatsTable, AppError> {
    let url = build_standings_url(&config.api_domain, season);
    let response: StandingsResponse = fetch(client, &url).await?;
    Ok(StatsTable::from_flattened(&response.season))
}
