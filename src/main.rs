use clap::{CommandFactory, Parser};
use spctl::cli::{is_usage_error, Cli, Command, LogLevel};
use spctl::config::Config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::fmt::writer::MakeWriterExt;

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}", log_path, e);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("spctl {} started with log level: {:?}", spctl::VERSION, level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("spctl").join("spctl.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".spctl").join("spctl.log");
    }
    PathBuf::from("spctl.log")
}

fn print_get_help() {
    let mut cmd = Cli::command();
    if let Some(get) = cmd.find_subcommand_mut("get") {
        eprintln!("{}", get.render_help());
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !is_usage_error(&err) => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = setup_logging(cli.global.log_level);

    let config = Config::load();

    let result = match &cli.command {
        Command::Get(args) => spctl::run_get(args, &cli.global, &config).await,
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("get failed: {}", err);
            eprintln!("{}", err);
            if err.wants_help() {
                print_get_help();
            }
            ExitCode::FAILURE
        }
    }
}
