mod bootstrap_helpers;
mod cli_args;
mod run_status;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tasklink_asana::{AsanaApiClient, AsanaConfig};
use tasklink_runtime::{PullRequestContext, TaskDispatcher};

use crate::bootstrap_helpers::init_tracing;
use crate::cli_args::Cli;
use crate::run_status::{report_fatal, report_outcome};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run_cli(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            report_fatal(&format!("{error:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run_cli(cli: &Cli) -> Result<bool> {
    let config = cli.task_link_config();
    config.validate()?;
    let context = PullRequestContext::load_from_event_path(&cli.event_path)?;
    let tracker = AsanaApiClient::new(AsanaConfig {
        api_base: config.asana_api_base.clone(),
        token: config.asana_token.clone(),
        request_timeout_ms: config.request_timeout_ms,
    })?;
    tracing::debug!(api_base = tracker.api_base(), "asana client ready");

    let dispatcher = TaskDispatcher::new(config, Arc::new(tracker))?;
    let outcome = dispatcher.run(&context).await?;
    Ok(report_outcome(&outcome))
}
