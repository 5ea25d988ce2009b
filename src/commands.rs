use crate::cli::{Args, Command, GameSection, OutputFormat};
use crate::config::Config;
use crate::data_fetcher::api::{
    create_http_client_with_timeout, fetch_game_awards, fetch_game_goal_events, fetch_game_info,
    fetch_game_penalty_events, fetch_game_players, fetch_game_referees, fetch_games_results,
    fetch_games_schedule, fetch_goalie_game_stats, fetch_player_active_seasons,
    fetch_player_game_log, fetch_player_profile, fetch_player_season_stats, fetch_player_stats,
    fetch_player_teams, fetch_season_goal_events, fetch_shot_map, fetch_skater_game_stats,
    fetch_standings, fetch_team_rosters, fetch_team_season_stats, fetch_team_stats,
    fetch_team_stats_all_time, fetch_teams_info,
};
use crate::data_fetcher::processors::StatsTable;
use crate::data_fetcher::query::{GameLogQuery, PlayerStatsQuery, TeamStatsQuery};
use crate::error::AppError;
use serde_json::Value;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.timeout == Some(0) {
        return Err(AppError::config_error(
            "Request timeout must be at least 1 second",
        ));
    }
    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

/// Handles the --list-config command.
///
/// Displays current configuration settings and their source paths.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await?;

    Ok(())
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments and saves changes.
/// Handles domain updates, log file path changes, and clearing log file paths.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_else(|_| Config {
        api_domain: String::new(),
        log_file_path: None,
        http_timeout_seconds: crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
    });

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Runs one data subcommand end to end.
///
/// Loads the configuration (applying the --timeout override), builds the
/// HTTP client once, fetches the requested table and writes it to stdout
/// in the selected output format.
pub async fn run_data_command(args: &Args, command: &Command) -> Result<(), AppError> {
    let mut config = Config::load().await?;
    if let Some(timeout) = args.timeout {
        config.http_timeout_seconds = timeout;
    }
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let table = match command {
        Command::Players {
            start_season,
            end_season,
            game_type,
            data_type,
            team,
            split_teams,
        } => {
            let mut query = PlayerStatsQuery::new(
                *start_season,
                *end_season,
                game_type.parse()?,
                data_type.parse()?,
            );
            query.team_id = team.clone();
            query.summed = !split_teams;
            fetch_player_stats(&client, &config, &query).await?
        }
        Command::GameLog {
            player_id,
            season,
            game_type,
        } => {
            let query = GameLogQuery::new(*player_id, *season, game_type.parse()?);
            fetch_player_game_log(&client, &config, &query).await?
        }
        Command::Profile { player_id } => fetch_player_profile(&client, &config, *player_id).await?,
        Command::PlayerTeams { player_id } => {
            fetch_player_teams(&client, &config, *player_id).await?
        }
        Command::PlayerSeasons {
            player_id,
            game_type,
        } => fetch_player_season_stats(&client, &config, *player_id, game_type.parse()?).await?,
        Command::ActiveSeasons { player_id } => {
            let seasons = fetch_player_active_seasons(&client, &config, *player_id).await?;
            print_season_list(&seasons, args.output);
            return Ok(());
        }
        Command::Games {
            season,
            game_type,
            simple,
        } => {
            if *simple {
                fetch_games_schedule(&client, &config, *season, game_type.parse()?).await?
            } else {
                fetch_games_results(&client, &config, *season, game_type.parse()?).await?
            }
        }
        Command::GoalEvents { season, game_type } => {
            fetch_season_goal_events(&client, &config, *season, game_type.parse()?).await?
        }
        Command::Game {
            season,
            game_id,
            section,
        } => match section {
            GameSection::Info => fetch_game_info(&client, &config, *season, *game_id).await?,
            GameSection::Goals => {
                fetch_game_goal_events(&client, &config, *season, *game_id).await?
            }
            GameSection::Penalties => {
                fetch_game_penalty_events(&client, &config, *season, *game_id).await?
            }
            GameSection::Players => fetch_game_players(&client, &config, *season, *game_id).await?,
            GameSection::Referees => {
                fetch_game_referees(&client, &config, *season, *game_id).await?
            }
            GameSection::Awards => fetch_game_awards(&client, &config, *season, *game_id).await?,
        },
        Command::GameStats {
            season,
            game_id,
            goalies,
            per_period,
        } => {
            let summed = !per_period;
            if *goalies {
                fetch_goalie_game_stats(&client, &config, *season, *game_id, summed).await?
            } else {
                fetch_skater_game_stats(&client, &config, *season, *game_id, summed).await?
            }
        }
        Command::ShotMap { season, game_id } => {
            fetch_shot_map(&client, &config, *season, *game_id).await?
        }
        Command::Teams {
            start_season,
            end_season,
            game_type,
            data_type,
            all_time,
        } => {
            if *all_time {
                fetch_team_stats_all_time(&client, &config, game_type.parse()?).await?
            } else {
                // clap requires both seasons unless --all-time is set
                let (Some(start), Some(end)) = (start_season, end_season) else {
                    return Err(AppError::config_error(
                        "teams needs both start and end seasons unless --all-time is set",
                    ));
                };
                let query =
                    TeamStatsQuery::new(*start, *end, game_type.parse()?, data_type.parse()?);
                fetch_team_stats(&client, &config, &query).await?
            }
        }
        Command::TeamsInfo => fetch_teams_info(&client, &config).await?,
        Command::TeamSeasonStats => fetch_team_season_stats(&client, &config).await?,
        Command::Rosters {
            start_season,
            end_season,
            game_type,
            team,
        } => {
            fetch_team_rosters(
                &client,
                &config,
                *start_season,
                *end_season,
                game_type.parse()?,
                team.as_deref(),
            )
            .await?
        }
        Command::Standings { season } => fetch_standings(&client, &config, *season).await?,
    };

    print_table(&table, args.output);
    Ok(())
}

/// Writes a result table to stdout in the selected output format.
fn print_table(table: &StatsTable, output: OutputFormat) {
    match output {
        OutputFormat::Csv => print!("{}", table.to_csv()),
        OutputFormat::Json => println!("{}", table.to_json_string_pretty()),
    }
}

/// Writes an active-seasons listing to stdout, one season per line in CSV
/// mode or as a JSON array.
fn print_season_list(seasons: &[i32], output: OutputFormat) {
    match output {
        OutputFormat::Csv => {
            println!("season");
            for season in seasons {
                println!("{season}");
            }
        }
        OutputFormat::Json => {
            println!("{:#}", Value::from(seasons.to_vec()));
        }
    }
}
