// src/main.rs
mod cli;
mod commands;
mod config;
mod constants;
mod data_fetcher;
mod error;
mod logging;

use clap::Parser;
use cli::Args;
use error::AppError;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = commands::validate_args(&args) {
        return report_error(&e);
    }

    // Version info and config maintenance run before logging setup so they
    // never create log files
    if cli::is_config_operation(&args) {
        if args.version {
            commands::handle_version_command();
            return ExitCode::SUCCESS;
        }

        let result = if args.list_config {
            commands::handle_list_config_command().await
        } else {
            commands::handle_config_update_command(&args).await
        };
        return match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => report_error(&e),
        };
    }

    let Some(command) = args.command.as_ref() else {
        eprintln!("No command given.");
        eprintln!("Run 'liiga_stats --help' for the available commands.");
        return ExitCode::from(2);
    };

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let _guard = match logging::setup_logging(&args).await {
        Ok((log_file_path, guard)) => {
            tracing::info!("Logs are being written to: {log_file_path}");
            guard
        }
        Err(e) => return report_error(&e),
    };

    match commands::run_data_command(&args, command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Reports an error on stderr and picks the exit code for its kind.
///
/// Validation failures exit 2 with a usage hint, network failures 3,
/// decode failures 4; anything else is the generic failure code.
fn report_error(error: &AppError) -> ExitCode {
    eprintln!("Error: {error}");
    if error.is_validation_error() {
        eprintln!("Run 'liiga_stats <command> --help' to see the accepted values.");
        ExitCode::from(2)
    } else if error.is_network_error() {
        ExitCode::from(3)
    } else if error.is_decode_error() {
        ExitCode::from(4)
    } else {
        ExitCode::FAILURE
    }
}
