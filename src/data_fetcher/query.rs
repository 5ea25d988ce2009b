//! Query parameter types and validation for the statistics endpoints.
//!
//! Every request type validates itself before a URL is built, so an invalid
//! season range or game type never reaches the network.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local};

use crate::constants::seasons::{FIRST_SEASON, SEASON_ROLLOVER_MONTH};
use crate::data_fetcher::processors::{
    ALL_PLAYERS_COLUMNS, ColumnSpec, PLAYER_ADVANCED_STATS_COLUMNS, PLAYER_BASIC_STATS_COLUMNS,
    PLAYER_GAME_TIMES_COLUMNS, PLAYER_GOAL_STATS_COLUMNS, PLAYER_PASSES_COLUMNS,
    PLAYER_PENALTY_STATS_COLUMNS, PLAYER_SHOT_STATS_COLUMNS, PLAYER_SKATING_STATS_COLUMNS,
};
use crate::error::AppError;

/// Tournament game type, carrying the Finnish-locale token the API expects
/// in URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameType {
    RegularSeason,
    Playoffs,
    Preseason,
    Playout,
    Qualifications,
    Chl,
}

impl GameType {
    /// The tournament token embedded in request URLs.
    pub fn tournament_token(self) -> &'static str {
        match self {
            GameType::RegularSeason => "runkosarja",
            GameType::Playoffs => "playoffs",
            GameType::Preseason => "valmistavat_ottelut",
            GameType::Playout => "playout",
            GameType::Qualifications => "qualifications",
            GameType::Chl => "chl",
        }
    }

    /// The caller-facing name, as parsed by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            GameType::RegularSeason => "regularseason",
            GameType::Playoffs => "playoff",
            GameType::Preseason => "preseason",
            GameType::Playout => "playout",
            GameType::Qualifications => "qualification",
            GameType::Chl => "chl",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "regularseason" => Ok(GameType::RegularSeason),
            "playoff" | "playoffs" => Ok(GameType::Playoffs),
            "preseason" => Ok(GameType::Preseason),
            "playout" => Ok(GameType::Playout),
            "qualification" | "qualifications" => Ok(GameType::Qualifications),
            "chl" => Ok(GameType::Chl),
            other => Err(AppError::invalid_game_type(
                other,
                allowed_list(GAMES_GAME_TYPES),
            )),
        }
    }
}

/// Game types the player and team statistics families accept.
pub const STATS_GAME_TYPES: &[GameType] = &[
    GameType::RegularSeason,
    GameType::Playoffs,
    GameType::Preseason,
    GameType::Playout,
    GameType::Qualifications,
];

/// The all-players historical listing is restricted to league play.
pub const ALL_PLAYERS_GAME_TYPES: &[GameType] = &[GameType::RegularSeason, GameType::Playoffs];

/// Game listings additionally cover CHL games.
pub const GAMES_GAME_TYPES: &[GameType] = &[
    GameType::RegularSeason,
    GameType::Playoffs,
    GameType::Preseason,
    GameType::Playout,
    GameType::Qualifications,
    GameType::Chl,
];

fn allowed_list(allowed: &[GameType]) -> String {
    allowed
        .iter()
        .map(|g| g.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks membership in an endpoint family's allowed game type set.
pub fn validate_game_type(game_type: GameType, allowed: &[GameType]) -> Result<(), AppError> {
    if allowed.contains(&game_type) {
        Ok(())
    } else {
        Err(AppError::invalid_game_type(
            game_type.as_str(),
            allowed_list(allowed),
        ))
    }
}

/// Checks that a season range is ordered.
pub fn validate_season_range(start_season: i32, end_season: i32) -> Result<(), AppError> {
    if start_season > end_season {
        Err(AppError::invalid_season_range(start_season, end_season))
    } else {
        Ok(())
    }
}

/// The season in progress, or the one most recently completed.
///
/// Seasons are named by their ending year and roll over in August, so from
/// August 2025 onward this returns 2026.
pub fn current_season() -> i32 {
    let now = Local::now();
    if now.month() >= SEASON_ROLLOVER_MONTH {
        now.year() + 1
    } else {
        now.year()
    }
}

/// Game log selector. Unlike tournament queries this keys into the response
/// object, with [`GameLogType::All`] concatenating every key's games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameLogType {
    RegularSeason,
    Playoffs,
    Preseason,
    Playout,
    Qualifications,
    Chl,
    All,
}

impl GameLogType {
    /// The response key holding this game type's rows, `None` for `All`.
    pub fn response_key(self) -> Option<&'static str> {
        match self {
            GameLogType::RegularSeason => Some("regular"),
            GameLogType::Playoffs => Some("playoffs"),
            GameLogType::Preseason => Some("practice"),
            GameLogType::Playout => Some("playout"),
            GameLogType::Qualifications => Some("qualifications"),
            GameLogType::Chl => Some("chl"),
            GameLogType::All => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameLogType::RegularSeason => "regularseason",
            GameLogType::Playoffs => "playoff",
            GameLogType::Preseason => "preseason",
            GameLogType::Playout => "playout",
            GameLogType::Qualifications => "qualification",
            GameLogType::Chl => "chl",
            GameLogType::All => "all",
        }
    }
}

impl fmt::Display for GameLogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameLogType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "regularseason" => Ok(GameLogType::RegularSeason),
            "playoff" | "playoffs" => Ok(GameLogType::Playoffs),
            // The stats payload files preseason games under "practice";
            // both spellings are accepted.
            "preseason" | "practice" => Ok(GameLogType::Preseason),
            "playout" => Ok(GameLogType::Playout),
            "qualification" | "qualifications" => Ok(GameLogType::Qualifications),
            "chl" => Ok(GameLogType::Chl),
            "all" => Ok(GameLogType::All),
            other => Err(AppError::invalid_game_type(
                other,
                "regularseason, playoff, preseason, playout, qualification, chl, all",
            )),
        }
    }
}

/// Data type selector of the summed player statistics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStatsType {
    BasicStats,
    GoalStats,
    ShotStats,
    Passes,
    PenaltyStats,
    GameTimes,
    SkatingStats,
    AdvancedStats,
    All,
}

impl PlayerStatsType {
    /// The dataType code sent in the query string.
    pub fn data_type(self) -> &'static str {
        match self {
            PlayerStatsType::BasicStats => "basicStats",
            PlayerStatsType::GoalStats => "goalStats",
            PlayerStatsType::ShotStats => "shotStats",
            PlayerStatsType::Passes => "passes",
            PlayerStatsType::PenaltyStats => "penaltyStats",
            PlayerStatsType::GameTimes => "gameTimes",
            PlayerStatsType::SkatingStats => "skatingStats",
            PlayerStatsType::AdvancedStats => "advancedStats",
            PlayerStatsType::All => "all",
        }
    }

    /// The fixed column projection for this data type.
    pub fn columns(self) -> &'static [ColumnSpec] {
        match self {
            PlayerStatsType::BasicStats => PLAYER_BASIC_STATS_COLUMNS,
            PlayerStatsType::GoalStats => PLAYER_GOAL_STATS_COLUMNS,
            PlayerStatsType::ShotStats => PLAYER_SHOT_STATS_COLUMNS,
            PlayerStatsType::Passes => PLAYER_PASSES_COLUMNS,
            PlayerStatsType::PenaltyStats => PLAYER_PENALTY_STATS_COLUMNS,
            PlayerStatsType::GameTimes => PLAYER_GAME_TIMES_COLUMNS,
            PlayerStatsType::SkatingStats => PLAYER_SKATING_STATS_COLUMNS,
            PlayerStatsType::AdvancedStats => PLAYER_ADVANCED_STATS_COLUMNS,
            PlayerStatsType::All => ALL_PLAYERS_COLUMNS,
        }
    }
}

impl fmt::Display for PlayerStatsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.data_type())
    }
}

impl FromStr for PlayerStatsType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basicstats" => Ok(PlayerStatsType::BasicStats),
            "goalstats" => Ok(PlayerStatsType::GoalStats),
            "shotstats" => Ok(PlayerStatsType::ShotStats),
            "passes" => Ok(PlayerStatsType::Passes),
            "penaltystats" => Ok(PlayerStatsType::PenaltyStats),
            "gametimes" => Ok(PlayerStatsType::GameTimes),
            "skatingstats" => Ok(PlayerStatsType::SkatingStats),
            "advancedstats" => Ok(PlayerStatsType::AdvancedStats),
            "all" => Ok(PlayerStatsType::All),
            other => Err(AppError::invalid_data_type(
                other,
                "basicStats, goalStats, shotStats, passes, penaltyStats, gameTimes, skatingStats, advancedStats, all",
            )),
        }
    }
}

/// Data type codes of the team statistics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamStatsType {
    Standings,
    Shots,
    Passes,
    Faceoffs,
    EvenStrength,
    Powerplay,
    PenaltyKill,
    Penalties,
    Attendance,
}

impl TeamStatsType {
    pub fn data_type(self) -> &'static str {
        match self {
            TeamStatsType::Standings => "standings",
            TeamStatsType::Shots => "shots",
            TeamStatsType::Passes => "passes",
            TeamStatsType::Faceoffs => "faceoffs",
            TeamStatsType::EvenStrength => "even_strength",
            TeamStatsType::Powerplay => "powerplay",
            TeamStatsType::PenaltyKill => "penalty_kill",
            TeamStatsType::Penalties => "penalties",
            TeamStatsType::Attendance => "attendance",
        }
    }
}

impl fmt::Display for TeamStatsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.data_type())
    }
}

impl FromStr for TeamStatsType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standings" => Ok(TeamStatsType::Standings),
            "shots" => Ok(TeamStatsType::Shots),
            "passes" => Ok(TeamStatsType::Passes),
            "faceoffs" => Ok(TeamStatsType::Faceoffs),
            "even_strength" | "even-strength" => Ok(TeamStatsType::EvenStrength),
            "powerplay" => Ok(TeamStatsType::Powerplay),
            "penalty_kill" | "penalty-kill" => Ok(TeamStatsType::PenaltyKill),
            "penalties" => Ok(TeamStatsType::Penalties),
            "attendance" => Ok(TeamStatsType::Attendance),
            other => Err(AppError::invalid_data_type(
                other,
                "standings, shots, passes, faceoffs, even_strength, powerplay, penalty_kill, penalties, attendance",
            )),
        }
    }
}

/// Parameters of a summed player statistics request.
#[derive(Debug, Clone)]
pub struct PlayerStatsQuery {
    pub start_season: i32,
    pub end_season: i32,
    pub game_type: GameType,
    pub data_type: PlayerStatsType,
    /// Restricts the results to one team when set.
    pub team_id: Option<String>,
    /// When true, one aggregate row per player; when false, one row per
    /// team the player appeared for.
    pub summed: bool,
}

impl PlayerStatsQuery {
    pub fn new(
        start_season: i32,
        end_season: i32,
        game_type: GameType,
        data_type: PlayerStatsType,
    ) -> Self {
        PlayerStatsQuery {
            start_season,
            end_season,
            game_type,
            data_type,
            team_id: None,
            summed: true,
        }
    }

    /// Basic stats over a season range.
    pub fn basic(start_season: i32, end_season: i32, game_type: GameType) -> Self {
        Self::new(start_season, end_season, game_type, PlayerStatsType::BasicStats)
    }

    /// Goal scoring stats.
    pub fn goals(start_season: i32, end_season: i32, game_type: GameType) -> Self {
        Self::new(start_season, end_season, game_type, PlayerStatsType::GoalStats)
    }

    /// Shooting stats.
    pub fn shots(start_season: i32, end_season: i32, game_type: GameType) -> Self {
        Self::new(start_season, end_season, game_type, PlayerStatsType::ShotStats)
    }

    /// Passing stats.
    pub fn passes(start_season: i32, end_season: i32, game_type: GameType) -> Self {
        Self::new(start_season, end_season, game_type, PlayerStatsType::Passes)
    }

    /// Penalty stats.
    pub fn penalties(start_season: i32, end_season: i32, game_type: GameType) -> Self {
        Self::new(start_season, end_season, game_type, PlayerStatsType::PenaltyStats)
    }

    /// Ice time stats.
    pub fn game_times(start_season: i32, end_season: i32, game_type: GameType) -> Self {
        Self::new(start_season, end_season, game_type, PlayerStatsType::GameTimes)
    }

    /// Skating distance and speed stats.
    pub fn skating(start_season: i32, end_season: i32, game_type: GameType) -> Self {
        Self::new(start_season, end_season, game_type, PlayerStatsType::SkatingStats)
    }

    /// Advanced metrics (Corsi, PDO, expected goals).
    pub fn advanced(start_season: i32, end_season: i32, game_type: GameType) -> Self {
        Self::new(start_season, end_season, game_type, PlayerStatsType::AdvancedStats)
    }

    /// The league-wide historical listing, defaulting to every recorded
    /// season.
    pub fn all_players(game_type: GameType) -> Self {
        Self::new(
            FIRST_SEASON,
            current_season(),
            game_type,
            PlayerStatsType::All,
        )
    }

    /// Validates season ordering and the game type against this data
    /// type's allowed set. Runs before any request is made.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_season_range(self.start_season, self.end_season)?;
        let allowed = match self.data_type {
            PlayerStatsType::All => ALL_PLAYERS_GAME_TYPES,
            _ => STATS_GAME_TYPES,
        };
        validate_game_type(self.game_type, allowed)
    }
}

/// Parameters of a player game log request.
#[derive(Debug, Clone)]
pub struct GameLogQuery {
    pub player_id: i64,
    pub season: i32,
    pub game_type: GameLogType,
}

impl GameLogQuery {
    pub fn new(player_id: i64, season: i32, game_type: GameLogType) -> Self {
        GameLogQuery {
            player_id,
            season,
            game_type,
        }
    }
}

/// Parameters of a team statistics request.
#[derive(Debug, Clone)]
pub struct TeamStatsQuery {
    pub start_season: i32,
    pub end_season: i32,
    pub game_type: GameType,
    pub data_type: TeamStatsType,
}

impl TeamStatsQuery {
    pub fn new(
        start_season: i32,
        end_season: i32,
        game_type: GameType,
        data_type: TeamStatsType,
    ) -> Self {
        TeamStatsQuery {
            start_season,
            end_season,
            game_type,
            data_type,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_season_range(self.start_season, self.end_season)?;
        validate_game_type(self.game_type, STATS_GAME_TYPES)
    }
}
