use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation is a configuration maintenance run.
/// These run without a subcommand:
/// - --config updates the API domain
/// - --set-log-file / --clear-log-file update the log location
/// - --list-config prints the active settings
/// - --version prints version information
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.version
}

/// Rendering of the result table printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// A JSON array of record objects
    Json,
}

/// Section of a single game's detail response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameSection {
    /// One row of game-level facts
    Info,
    /// Goal events of both sides
    Goals,
    /// Penalty events of both sides
    Penalties,
    /// Both rosters, home side first
    Players,
    /// Referee assignments
    Referees,
    /// Post-game awards
    Awards,
}

/// Finnish Hockey League (Liiga) Statistics Client
///
/// Fetches player, team, and game statistics from the Liiga API and prints
/// them as flat tables. Every subcommand writes one table to stdout in the
/// selected output format; logs go to stderr or the log file, never into
/// the table stream.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format for the result table.
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Csv,
        help_heading = "Display Options"
    )]
    pub output: OutputFormat,

    /// Request timeout in seconds, overriding the configured value for this run.
    #[arg(long = "timeout", value_name = "SECONDS", help_heading = "Network")]
    pub timeout: Option<u64>,

    /// Update the API domain in config. The https:// prefix is added on
    /// save if missing.
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_DOMAIN")]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug logging. Log output is mirrored to stderr in addition
    /// to the log file. The log file is created if it doesn't exist.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summed player statistics of one data type over a season range.
    ///
    /// Data types: basicStats, goalStats, shotStats, passes, penaltyStats,
    /// gameTimes, skatingStats, advancedStats, or all (the historical
    /// league-wide listing, regular season and playoffs only).
    Players {
        /// First season of the range, named by its ending year
        start_season: i32,

        /// Last season of the range, inclusive
        end_season: i32,

        /// Game type: regularseason, playoff, preseason, playout, qualification
        #[arg(short = 'g', long = "game-type", default_value = "regularseason")]
        game_type: String,

        /// Data type selecting the column set
        #[arg(short = 'd', long = "data-type", default_value = "basicStats")]
        data_type: String,

        /// Restrict the results to one team id
        #[arg(short = 't', long = "team")]
        team: Option<String>,

        /// One row per team the player appeared for instead of one aggregate row
        #[arg(long = "split-teams")]
        split_teams: bool,
    },

    /// A player's per-game rows for one season.
    GameLog {
        /// Player id
        player_id: i64,

        /// Season, named by its ending year
        season: i32,

        /// Game type, or all to concatenate every available type
        #[arg(short = 'g', long = "game-type", default_value = "all")]
        game_type: String,
    },

    /// A player's profile as a single-row table.
    Profile {
        /// Player id
        player_id: i64,
    },

    /// The teams a player has played for, one row per season entry.
    PlayerTeams {
        /// Player id
        player_id: i64,
    },

    /// A player's per-season statistics.
    PlayerSeasons {
        /// Player id
        player_id: i64,

        /// Game type, or all for every type sorted by season
        #[arg(short = 'g', long = "game-type", default_value = "all")]
        game_type: String,
    },

    /// The seasons a player has appeared in, one per line.
    ActiveSeasons {
        /// Player id
        player_id: i64,
    },

    /// The games of a season as a results table.
    Games {
        /// Season, named by its ending year
        season: i32,

        /// Game type: regularseason, playoff, preseason, playout, qualification, chl
        #[arg(short = 'g', long = "game-type", default_value = "regularseason")]
        game_type: String,

        /// Use the schedule listing, recursively flattened, instead of the
        /// fixed results projection
        #[arg(long = "simple")]
        simple: bool,
    },

    /// Every goal scored in a season, one row per goal event.
    GoalEvents {
        /// Season, named by its ending year
        season: i32,

        /// Game type: regularseason, playoff, preseason, playout, qualification, chl
        #[arg(short = 'g', long = "game-type", default_value = "regularseason")]
        game_type: String,
    },

    /// One game's detail: info, events, rosters, referees, or awards.
    Game {
        /// Season, named by its ending year
        season: i32,

        /// Game id
        game_id: i32,

        /// Which section of the game detail to print
        #[arg(short = 's', long = "section", value_enum, default_value_t = GameSection::Info)]
        section: GameSection,
    },

    /// Skater or goaltender statistics of one game.
    GameStats {
        /// Season, named by its ending year
        season: i32,

        /// Game id
        game_id: i32,

        /// Goaltender statistics instead of skater statistics
        #[arg(long = "goalies")]
        goalies: bool,

        /// One row per player-period instead of one aggregate row per player
        #[arg(long = "per-period")]
        per_period: bool,
    },

    /// The shot map of one game.
    ShotMap {
        /// Season, named by its ending year
        season: i32,

        /// Game id
        game_id: i32,
    },

    /// Team statistics of one data type over a season range.
    ///
    /// Data types: standings, shots, passes, faceoffs, even_strength,
    /// powerplay, penalty_kill, penalties, attendance.
    Teams {
        /// First season of the range; required unless --all-time is set
        #[arg(required_unless_present = "all_time")]
        start_season: Option<i32>,

        /// Last season of the range, inclusive; required unless --all-time is set
        #[arg(required_unless_present = "all_time")]
        end_season: Option<i32>,

        /// Game type: regularseason, playoff, preseason, playout, qualification
        #[arg(short = 'g', long = "game-type", default_value = "regularseason")]
        game_type: String,

        /// Data type selecting the statistics family
        #[arg(short = 'd', long = "data-type", default_value = "standings")]
        data_type: String,

        /// Standings over every season the league has played
        #[arg(long = "all-time", conflicts_with_all = ["start_season", "end_season"])]
        all_time: bool,
    },

    /// The team directory, one row per team.
    TeamsInfo,

    /// Every team's per-tournament season statistics.
    TeamSeasonStats,

    /// The rosters of a season range, one row per player entry.
    Rosters {
        /// First season of the range, named by its ending year
        start_season: i32,

        /// Last season of the range, inclusive
        end_season: i32,

        /// Game type: regularseason, playoff, preseason, playout, qualification
        #[arg(short = 'g', long = "game-type", default_value = "regularseason")]
        game_type: String,

        /// Restrict the results to one team id
        #[arg(short = 't', long = "team")]
        team: Option<String>,
    },

    /// The league table of one season.
    Standings {
        /// Season, named by its ending year
        season: i32,
    },
}
