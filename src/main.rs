mod cli;
mod config;
mod error;
mod search;
mod selector;
mod status;
mod ui;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Command};
use config::{CONFIG_FILE, DispatchConfig};
use error::DispatchError;
use search::{SearchRequest, SearchResponse, search_best_robot};
use status::{FileStatusSource, HttpStatusSource};
use ui::SearchProgress;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let request = cli.command.request();
    let progress = (!cli.json).then(|| SearchProgress::start(&request));

    let outcome = run(
        &cli.command,
        Path::new(CONFIG_FILE),
        cli.base_url.as_deref(),
        &request,
    )
    .await;

    match &progress {
        Some(progress) => progress.finish(&outcome),
        None => match &outcome {
            Ok(response) => ui::print_json(response),
            Err(err) => eprintln!("{err}"),
        },
    }

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(err.exit_code()),
    }
}

/// Run one search. Only `search` reads the config file; `select` works offline without it.
async fn run(
    command: &Command,
    config_path: &Path,
    base_url: Option<&str>,
    request: &SearchRequest,
) -> Result<SearchResponse, DispatchError> {
    match command {
        Command::Search { .. } => {
            let config = http_config(config_path, base_url)?;
            let source = HttpStatusSource::from_config(&config)?;
            tracing::debug!(url = source.url(), "using HTTP status source");
            search_best_robot(&source, request).await
        }
        Command::Select { file, .. } => {
            search_best_robot(&FileStatusSource::new(file), request).await
        }
    }
}

fn http_config(
    config_path: &Path,
    base_url: Option<&str>,
) -> Result<DispatchConfig, DispatchError> {
    let mut config =
        DispatchConfig::load(config_path).map_err(|e| DispatchError::Config(e.to_string()))?;
    if let Some(url) = base_url {
        config.base_url = url.to_string();
    }
    config.validate()?;
    Ok(config)
}
