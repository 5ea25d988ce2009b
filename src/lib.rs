//! Finnish Hockey League (Liiga) Statistics Client Library
//!
//! This library provides functionality for fetching player, team, and game
//! statistics from the Liiga API and shaping them into uniform result tables.
//!
//! # Examples
//!
//! ```rust,no_run
//! use liiga_stats::config::Config;
//! use liiga_stats::data_fetcher::api::{create_http_client_with_timeout, fetch_player_stats};
//! use liiga_stats::data_fetcher::query::{GameType, PlayerStatsQuery};
//! use liiga_stats::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     // One row per player, goal statistics summed over both seasons
//!     let query = PlayerStatsQuery::goals(2023, 2024, GameType::RegularSeason);
//!     let table = fetch_player_stats(&client, &config, &query).await?;
//!
//!     // Render as CSV to stdout
//!     print!("{}", table.to_csv());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{fetch_player_game_log, fetch_player_stats};
pub use data_fetcher::processors::StatsTable;
pub use data_fetcher::query::{
    GameLogQuery, GameLogType, GameType, PlayerStatsQuery, PlayerStatsType, TeamStatsQuery,
    TeamStatsType,
};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
