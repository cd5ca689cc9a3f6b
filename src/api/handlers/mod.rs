//! API handlers and the state they share.

pub mod health;
pub mod proxy;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use url::Url;

/// Upstream location of the verification backend.
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    upstream_base_url: Url,
}

impl ProxyConfig {
    /// # Errors
    /// Returns an error if `upstream` is not an absolute http(s) URL with a host.
    pub fn new(upstream: &str) -> Result<Self> {
        let url = Url::parse(upstream)
            .with_context(|| format!("Invalid upstream URL: {upstream}"))?;

        match url.scheme() {
            "http" | "https" => (),
            scheme => return Err(anyhow!("Unsupported upstream URL scheme: {scheme}")),
        }

        if url.host_str().is_none() {
            return Err(anyhow!("Upstream URL must include a host: {upstream}"));
        }

        Ok(Self {
            upstream_base_url: url,
        })
    }

    #[must_use]
    pub const fn upstream_base_url(&self) -> &Url {
        &self.upstream_base_url
    }

    /// `<base>/api/verify-email/<token>/`, with `token` encoded as a single path segment.
    ///
    /// # Errors
    /// Returns an error if the base URL cannot carry a path.
    pub fn verify_email_url(&self, token: &str) -> Result<Url> {
        let mut url = self.upstream_base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| anyhow!("Upstream URL cannot be a base: {}", self.upstream_base_url))?
            .pop_if_empty()
            .extend(["api", "verify-email", token, ""]);

        Ok(url)
    }
}

/// Shared, immutable per-process state for the proxy handlers.
#[derive(Debug)]
pub struct ProxyState {
    config: ProxyConfig,
    client: Client,
}

impl ProxyState {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ProxyConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { config, client })
    }

    #[must_use]
    pub const fn config(&self) -> &ProxyConfig {
        &self.config
    }

    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }
}
