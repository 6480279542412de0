//! Paydesk main entry point

use clap::Parser;
use log::{info, warn};
use paydesk_api::start_server;
use paydesk_client::HttpTransactionService;
use paydesk_config::Config;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "paydesk")]
#[command(version = "0.1.0")]
#[command(about = "A school-fee payment transactions dashboard", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match Config::load(args.config.clone()) {
        Ok(config) => config,
        Err(paydesk_config::ConfigError::FileNotFound { path }) => {
            eprintln!("[WARN] Config file not found: {}, using defaults", path);
            Config::default()
        }
        Err(err) => return Err(err.into()),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.level),
    )
    .init();

    info!(
        "Config loaded: upstream={}, page_size={}",
        config.upstream.base_url, config.pagination.page_size
    );
    if config.upstream.base_url.starts_with("http://") {
        warn!("upstream base URL is plain http; session cookies travel unencrypted");
    }

    let service = Arc::new(HttpTransactionService::new(
        &config.upstream.base_url,
        Duration::from_secs(config.upstream.timeout_secs),
    )?);

    let rt = Runtime::new()?;
    rt.block_on(start_server(config, service))?;

    Ok(())
}
