/*
 * ghfeed - Latest releases and commits of a GitHub repository from its Atom feeds.
 */

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

mod cli;
mod common;
mod feed;
mod logging;
mod network;
mod pipeline;
mod ui;

use crate::common::config::{self, Config};
use crate::common::error::GhFeedError;
use cli::{Cli, VERSION};
use feed::resolver;
use network::HttpClient;
use pipeline::{Pipeline, RunOptions};
use ui::Output;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", config::generate_default_config());
        return Ok(ExitCode::SUCCESS);
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => cli.apply_to(config.with_env_overrides()),
        Err(e) => {
            Output::new(!cli.no_color).report(&e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let _log_guard = logging::init(config.general.verbose, config.log_path().as_deref())?;
    debug!("ghfeed {} starting", VERSION);
    if config_path.exists() {
        debug!("Loaded config from {:?}", config_path);
    } else {
        debug!("Config file {:?} not found, using defaults", config_path);
    }

    let output = Output::new(config.ui.colors);
    // Only --print-config runs without a URL, and it has already returned
    let url = cli.url.as_deref().unwrap_or_default();

    let client = match HttpClient::from_config(&config.network) {
        Ok(client) => client,
        Err(e) => {
            output.report(&GhFeedError::from(e));
            return Ok(ExitCode::FAILURE);
        }
    };
    if client.is_insecure() {
        output.warn("TLS certificate verification is disabled for this run");
    }

    let (releases, commits) = cli.feed_selection();
    let targets = resolver::plan(url, releases, commits);

    let pipeline = Pipeline::new(
        client,
        RunOptions {
            output_dir: PathBuf::from(&config.output.directory),
            count: config.output.count,
            progress: config.ui.progress,
            output,
        },
    );

    let report = pipeline.run(&targets, &mut std::io::stdout().lock()).await;
    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        for failed in report.kinds.iter().filter(|k| k.outcome.is_err()) {
            debug!("{} feed {} did not complete", failed.kind, failed.url);
        }
        output.info(&format!("{} of {} feeds failed", report.failures(), report.kinds.len()));
        Ok(ExitCode::FAILURE)
    }
}
