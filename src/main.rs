use clap::Parser;
use stayfinder::cli::{self, Cli};
use stayfinder::config::{ConfigError, HostConfig};
use stayfinder::host::{HostError, HostService};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Host(#[from] HostError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = HostConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    if cli.token.is_some() {
        config.api_token = cli.token.clone();
    }

    let request = cli.command.request();
    tracing::info!(operation = request.operation(), base_url = %config.base_url, "stayfinder-host");

    let service = HostService::new(&config)?;
    let json = cli::run(&service, request).await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
