//! Client configuration.
//!
//! The base URL is the single environment-sourced knob (`SWARMONE_API_BASE`).
//! When it is unset the client issues requests as relative paths, which is
//! the deployment topology where a local reverse proxy forwards `/v1/*` and
//! `/health` to the backend process. Everything else is set explicitly at
//! construction; there is no process-wide mutable state.

use std::time::Duration;

/// Endpoint path for consensus submissions.
pub const ASK_PATH: &str = "/v1/ask";

/// Endpoint path for the backend health probe.
pub const HEALTH_PATH: &str = "/health";

/// Environment variable selecting the API base URL.
pub const API_BASE_ENV: &str = "SWARMONE_API_BASE";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration handed to [`crate::SwarmClient`] at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the consensus service, without a trailing slash.
    ///
    /// Empty means requests go out as relative paths (`/v1/ask`), relying on
    /// a same-origin reverse proxy. Native deployments that talk to the
    /// backend directly must set [`API_BASE_ENV`] or use
    /// [`ClientConfig::with_base_url`].
    pub base_url: String,
    /// Wall-clock budget for one complete call.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Resolve the base URL from [`API_BASE_ENV`]; absent means relative
    /// paths.
    pub fn from_env() -> Self {
        Self::default().with_base_url(std::env::var(API_BASE_ENV).unwrap_or_default())
    }

    /// Set the base URL, trimming any trailing slashes so path joins stay
    /// canonical.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the per-call timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Full URL of the consensus submission endpoint.
    pub fn ask_url(&self) -> String {
        format!("{}{ASK_PATH}", self.base_url)
    }

    /// Full URL of the health probe endpoint.
    pub fn health_url(&self) -> String {
        format!("{}{HEALTH_PATH}", self.base_url)
    }
}
