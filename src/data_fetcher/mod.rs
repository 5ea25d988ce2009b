pub mod api;
pub mod models;
pub mod processors;
pub mod query;

pub use api::{fetch_player_game_log, fetch_player_stats, fetch_standings, fetch_team_stats};
pub use processors::StatsTable;
pub use query::{
    GameLogQuery, GameLogType, GameType, PlayerStatsQuery, PlayerStatsType, TeamStatsQuery,
    TeamStatsType,
};
