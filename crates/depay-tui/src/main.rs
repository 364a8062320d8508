/*
[INPUT]:  CLI arguments, YAML configuration file, environment probes
[OUTPUT]: Running DePay terminal client or generated configuration
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or log capture
*/

mod cli;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::{Arc, Mutex as StdMutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

use depay_adapter::DepayClient;
use depay_tui::tui::{LogBuffer, LogBufferHandle, LogWriterFactory, LOG_BUFFER_CAPACITY};
use depay_tui::{run_tui_with_log, AppConfig};

/// Environment variable marking the host as biometric-capable
const BIOMETRIC_ENV: &str = "DEPAY_BIOMETRIC";

#[derive(Parser, Debug)]
#[command(name = "depay", version, about = "DePay digital wallet terminal client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Backend API base URL, overriding the configured one
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a configuration file interactively
    Init {
        #[arg(long = "output", value_name = "PATH", default_value = "depay.yaml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Command::Init { output }) = args.command {
        return cli::init::run_init(output);
    }

    // In TUI mode log lines go to the in-app buffer; stdout belongs to
    // the terminal UI once raw mode is on.
    let log_buffer: LogBufferHandle = Arc::new(StdMutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    if args.dry_run {
        init_tracing(&args.log_level, None)?;
    } else {
        init_tracing(
            &args.log_level,
            Some(LogWriterFactory::new(log_buffer.clone())),
        )?;
    }

    let config = load_config(args.config_path.as_deref())?;
    let base_url = args
        .api_url
        .unwrap_or_else(|| config.api.base_url.clone());

    info!(base_url = %base_url, dry_run = args.dry_run, "starting depay client");

    let client = DepayClient::with_config_and_base_url(config.client_config(), &base_url)
        .context("build HTTP client")?;

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let biometric_available = std::env::var(BIOMETRIC_ENV).is_ok_and(|value| value == "1");

    run_tui_with_log(client, config.account.clone(), biometric_available, log_buffer).await
}

fn init_tracing(log_level: &str, writer: Option<LogWriterFactory>) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let result = match writer {
        Some(factory) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(factory)
            .with_ansi(false)
            .try_init(),
        None => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };
    result
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<AppConfig> {
    if let Some(path) = path {
        let path_str = path.to_str().context("config path must be valid utf-8")?;
        return AppConfig::from_file(path_str).context("load config");
    }

    // Without --config, pick up ~/.config/depay/config.yaml when present.
    let default_path = dirs::config_dir().map(|dir| dir.join("depay").join("config.yaml"));
    match default_path {
        Some(path) if path.exists() => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            AppConfig::from_file(path_str).context("load config")
        }
        _ => Ok(AppConfig::default()),
    }
}
