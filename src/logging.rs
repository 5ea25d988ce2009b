use crate::cli::Args;
use crate::config::Config;
use crate::constants::logging::{
    DEBUG_FILTER_DIRECTIVE, DEFAULT_FILTER_DIRECTIVE, DEFAULT_LOG_FILE_NAME,
};
use crate::error::AppError;
use std::io::stderr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up logging configuration for the application.
///
/// Configures logging based on the provided arguments and config:
/// - Logs always go to a daily rolling file, never to stdout, which carries
///   the requested data and must stay parseable
/// - Debug mode mirrors logs to stderr at debug level
/// - Creates log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // Try to load config to get log file path if specified
    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(DEFAULT_LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), DEFAULT_LOG_FILE_NAME.to_string()),
    };

    // Create log directory if it doesn't exist
    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    // Set up a rolling file appender that creates a new log file each day
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // Create a non-blocking writer for the file appender
    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry();
    let directive = if args.debug {
        DEBUG_FILTER_DIRECTIVE
    } else {
        DEFAULT_FILTER_DIRECTIVE
    };

    if args.debug {
        // Debug mode: mirror logs to stderr, keeping stdout free for data
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stderr)
                    .with_ansi(true)
                    .with_filter(
                        EnvFilter::from_default_env()
                            .add_directive(directive.parse().unwrap()),
                    ),
            )
            .with(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(
                        EnvFilter::from_default_env()
                            .add_directive(directive.parse().unwrap()),
                    ),
            )
            .init();
    } else {
        // Default: log only to file
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(
                        EnvFilter::from_default_env()
                            .add_directive(directive.parse().unwrap()),
                    ),
            )
            .init();
    }

    // Return the log file path and guard
    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
