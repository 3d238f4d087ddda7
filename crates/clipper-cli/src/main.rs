/*
[INPUT]:  CLI arguments, optional YAML configuration file, environment
[OUTPUT]: JSON API results on stdout, normalized errors on stderr
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or output format
*/

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use clipper_client::ClipperClient;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::config::{FileConfig, Overrides};

#[derive(Parser, Debug)]
#[command(name = "clipper", version, about = "Command line client for the Clipper API")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL", env = "CLIPPER_BASE_URL")]
    base_url: Option<String>,
    #[arg(long = "token", value_name = "TOKEN", env = "CLIPPER_TOKEN", hide_env_values = true)]
    token: Option<String>,
    #[arg(long = "timeout-ms", value_name = "MS")]
    timeout_ms: Option<u64>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let file = match &args.config_path {
        Some(path) => {
            info!(config_path = %path.display(), "loading configuration");
            FileConfig::from_file(path).context("load config")?
        }
        None => FileConfig::default(),
    };
    let overrides = Overrides {
        base_url: args.base_url,
        token: args.token,
        timeout_ms: args.timeout_ms,
    };
    let client_config = config::resolve(file, overrides)?;
    debug!(config = ?client_config, "configuration resolved");

    let client = ClipperClient::new(&client_config).map_err(|err| anyhow!(err))?;

    match commands::execute(args.command, &client).await {
        Ok(value) => {
            if !value.is_null() {
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", serde_json::to_string_pretty(&err)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
