use crate::api::{self, ProxyConfig, ProxyState};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub upstream_url: String,
}

/// Execute the proxy action.
/// # Errors
/// Returns an error if the upstream URL is invalid or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let config = ProxyConfig::new(&args.upstream_url).context("Invalid TASKBOARD_UPSTREAM_URL")?;

    debug!("Forwarding verification requests to {}", config.upstream_base_url());

    let state = Arc::new(ProxyState::new(config)?);

    api::new(args.port, state).await
}
