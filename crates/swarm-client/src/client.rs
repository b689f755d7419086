//! Consensus API client.
//!
//! One `reqwest::Client` is built per `SwarmClient` with the configured
//! timeout, then shared by every call. `ask` issues exactly one POST per
//! invocation. No retries, no response caching; transient-failure policy
//! belongs to the caller.

use tokio_util::sync::CancellationToken;

use crate::{
    config::ClientConfig,
    consensus::{AskRequest, ConsensusResult, HealthStatus},
    error::RequestError,
};

/// Client for the swarm consensus service.
///
/// All methods take `&self`; the client is safe to share across tasks.
pub struct SwarmClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl SwarmClient {
    /// Build a client over the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, RequestError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// Build a client from [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self, RequestError> {
        Self::new(ClientConfig::from_env())
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit one instruction and wait for the swarm's verdict.
    ///
    /// An empty or absent `template_id` is left off the wire entirely. When
    /// `cancel` is supplied and fires before the call completes, the
    /// in-flight request is dropped and the outcome is
    /// [`RequestError::Cancelled`]; a token that has already fired means no
    /// request is issued at all. Every call produces exactly one outcome.
    pub async fn ask(
        &self,
        template_id: Option<&str>,
        instruction: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<ConsensusResult, RequestError> {
        let request = AskRequest::new(template_id, instruction);
        match cancel {
            None => self.ask_inner(&request).await,
            Some(token) => {
                tokio::select! {
                    biased; // cancellation wins a simultaneous completion

                    _ = token.cancelled() => {
                        tracing::debug!("ask cancelled");
                        Err(RequestError::Cancelled)
                    }
                    outcome = self.ask_inner(&request) => outcome,
                }
            }
        }
    }

    async fn ask_inner(&self, request: &AskRequest) -> Result<ConsensusResult, RequestError> {
        let url = self.config.ask_url();
        tracing::debug!(
            url = %url,
            template_id = request.template_id.as_deref().unwrap_or(""),
            "submitting instruction"
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::from_status(status.as_u16(), body));
        }

        let result: ConsensusResult = response
            .json()
            .await
            .map_err(|e| RequestError::Malformed(e.to_string()))?;

        if let Some(errors) = &result.runner_errors {
            if errors.iter().any(|e| !e.is_empty()) {
                tracing::warn!(
                    consensus_id = %result.consensus_id,
                    errors = ?errors,
                    "runners reported errors"
                );
            }
        }
        tracing::debug!(
            consensus_id = %result.consensus_id,
            winner_index = result.winner_index,
            runners = result.runners,
            "verdict received"
        );
        Ok(result)
    }

    /// Probe the backend's health endpoint.
    pub async fn health(&self) -> Result<HealthStatus, RequestError> {
        let url = self.config.health_url();
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::from_status(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| RequestError::Malformed(e.to_string()))
    }
}
