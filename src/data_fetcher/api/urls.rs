//! URL building utilities for API endpoints

use crate::data_fetcher::query::{GameType, PlayerStatsType, TeamStatsType};

/// Builds the summed player statistics URL.
///
/// The season bounds are embedded verbatim in the path, the tournament
/// token comes from the game type, and `splitTeams=true` is always
/// requested so one response serves both aggregation modes. An absent team
/// filter leaves the `team` parameter empty, which the API treats as no
/// filter.
///
/// # Arguments
/// * `api_domain` - The base API domain
/// * `start_season` - First season of the range (year the season ends)
/// * `end_season` - Last season of the range
/// * `game_type` - Tournament game type
/// * `summed` - The summed path segment
/// * `team_id` - Optional team filter, embedded verbatim
/// * `data_type` - Statistics data type code
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::api::build_player_stats_url;
/// use liiga_stats::data_fetcher::query::{GameType, PlayerStatsType};
///
/// let url = build_player_stats_url(
///     "https://api.example.com",
///     2023,
///     2024,
///     GameType::RegularSeason,
///     false,
///     Some("168761288"),
///     PlayerStatsType::BasicStats,
/// );
/// assert_eq!(
///     url,
///     "https://api.example.com/players/stats/summed/2023/2024/runkosarja/false?team=168761288&dataType=basicStats&splitTeams=true"
/// );
/// ```
pub fn build_player_stats_url(
    api_domain: &str,
    start_season: i32,
    end_season: i32,
    game_type: GameType,
    summed: bool,
    team_id: Option<&str>,
    data_type: PlayerStatsType,
) -> String {
    let tournament = game_type.tournament_token();
    let team = team_id.unwrap_or("");
    let data_type = data_type.data_type();
    format!(
        "{api_domain}/players/stats/summed/{start_season}/{end_season}/{tournament}/{summed}?team={team}&dataType={data_type}&splitTeams=true"
    )
}

/// Builds the game log URL of one player's season.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::api::build_player_game_log_url;
///
/// let url = build_player_game_log_url("https://api.example.com", 37275388, 2024);
/// assert_eq!(url, "https://api.example.com/players/info/37275388/games/2024");
/// ```
pub fn build_player_game_log_url(api_domain: &str, player_id: i64, season: i32) -> String {
    format!("{api_domain}/players/info/{player_id}/games/{season}")
}

/// Builds the player info URL serving the profile, active seasons, teams
/// played for and per-season statistics.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::api::build_player_info_url;
///
/// let url = build_player_info_url("https://api.example.com", 37275388);
/// assert_eq!(url, "https://api.example.com/players/info/37275388");
/// ```
pub fn build_player_info_url(api_domain: &str, player_id: i64) -> String {
    format!("{api_domain}/players/info/{player_id}")
}

/// Builds the team statistics URL for a season range and data type.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::api::build_team_stats_url;
/// use liiga_stats::data_fetcher::query::{GameType, TeamStatsType};
///
/// let url = build_team_stats_url(
///     "https://api.example.com",
///     2020,
///     2024,
///     GameType::Playoffs,
///     TeamStatsType::Attendance,
/// );
/// assert_eq!(
///     url,
///     "https://api.example.com/teams/stats?seasonFrom=2020&seasonTo=2024&tournament=playoffs&dataType=attendance"
/// );
/// ```
pub fn build_team_stats_url(
    api_domain: &str,
    start_season: i32,
    end_season: i32,
    game_type: GameType,
    data_type: TeamStatsType,
) -> String {
    let tournament = game_type.tournament_token();
    let data_type = data_type.data_type();
    format!(
        "{api_domain}/teams/stats?seasonFrom={start_season}&seasonTo={end_season}&tournament={tournament}&dataType={data_type}"
    )
}

/// Builds the teams info URL.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::api::build_teams_info_url;
///
/// let url = build_teams_info_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/teams/info");
/// ```
pub fn build_teams_info_url(api_domain: &str) -> String {
    format!("{api_domain}/teams/info")
}

/// Builds the roster listing URL for a season range.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::api::build_rosters_url;
/// use liiga_stats::data_fetcher::query::GameType;
///
/// let url = build_rosters_url("https://api.example.com", 2024, 2025, GameType::RegularSeason, None);
/// assert_eq!(
///     url,
///     "https://api.example.com/players/info?tournament=runkosarja&fromSeason=2024&toSeason=2025&team="
/// );
/// ```
pub fn build_rosters_url(
    api_domain: &str,
    start_season: i32,
    end_season: i32,
    game_type: GameType,
    team_id: Option<&str>,
) -> String {
    let tournament = game_type.tournament_token();
    let team = team_id.unwrap_or("");
    format!(
        "{api_domain}/players/info?tournament={tournament}&fromSeason={start_season}&toSeason={end_season}&team={team}"
    )
}

/// Builds the season standings URL. The path carries a trailing slash
/// before the query string, matching the upstream route.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::api::build_standings_url;
///
/// let url = build_standings_url("https://api.example.com", 2025);
/// assert_eq!(url, "https://api.example.com/standings/?season=2025");
/// ```
pub fn build_standings_url(api_domain: &str, season: i32) -> String {
    format!("{api_domain}/standings/?season={season}")
}

/// Builds the game listing URL of a season.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::api::build_games_url;
/// use liiga_stats::data_fetcher::query::GameType;
///
/// let url = build_games_url("https://api.example.com", 2025, GameType::Chl);
/// assert_eq!(url, "https://api.example.com/games?tournament=chl&season=2025");
/// ```
pub fn build_games_url(api_domain: &str, season: i32, game_type: GameType) -> String {
    let tournament = game_type.tournament_token();
    format!("{api_domain}/games?tournament={tournament}&season={season}")
}

/// Builds the schedule URL of a season.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::api::build_schedule_url;
/// use liiga_stats::data_fetcher::query::GameType;
///
/// let url = build_schedule_url("https://api.example.com", 2025, GameType::Preseason);
/// assert_eq!(
///     url,
///     "https://api.example.com/schedule?tournament=valmistavat_ottelut&season=2025"
/// );
/// ```
pub fn build_schedule_url(api_domain: &str, season: i32, game_type: GameType) -> String {
    let tournament = game_type.tournament_token();
    format!("{api_domain}/schedule?tournament={tournament}&season={season}")
}

/// Builds a single game's detail URL.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::api::build_game_url;
///
/// let url = build_game_url("https://api.example.com", 2024, 12345);
/// assert_eq!(url, "https://api.example.com/games/2024/12345");
/// ```
pub fn build_game_url(api_domain: &str, season: i32, game_id: i32) -> String {
    format!("{api_domain}/games/{season}/{game_id}")
}

/// Builds a single game's period statistics URL.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::api::build_game_stats_url;
///
/// let url = build_game_stats_url("https://api.example.com", 2024, 12345);
/// assert_eq!(url, "https://api.example.com/games/stats/2024/12345");
/// ```
pub fn build_game_stats_url(api_domain: &str, season: i32, game_id: i32) -> String {
    format!("{api_domain}/games/stats/{season}/{game_id}")
}

/// Builds a single game's shot map URL.
///
/// # Example
/// ```
/// use liiga_stats::data_fetcher::api::build_shot_map_url;
///
/// let url = build_shot_map_url("https://api.example.com", 2024, 12345);
/// assert_eq!(url, "https://api.example.com/shotmap/2024/12345");
/// ```
pub fn build_shot_map_url(api_domain: &str, season: i32, game_id: i32) -> String {
    format!("{api_domain}/shotmap/{season}/{game_id}")
}
