//! Wire types for the consensus service.
//!
//! The response shape is decoded tolerantly: every field the backend may
//! omit (or that older deployments never sent) is either defaulted or an
//! explicit `Option`. Only `consensus_id` is required, so a payload without
//! it is rejected as malformed rather than silently accepted.

use serde::{Deserialize, Serialize};

/// Body of `POST /v1/ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// Prompt template selector. Omitted from the JSON entirely when absent;
    /// the backend treats a missing key as "use the default template".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Full instruction text submitted to the swarm.
    pub instruction: String,
}

impl AskRequest {
    /// Build a request, dropping an empty `template_id` so it is omitted
    /// from the wire instead of being sent as `""`.
    pub fn new(template_id: Option<&str>, instruction: &str) -> Self {
        Self {
            template_id: template_id
                .filter(|t| !t.is_empty())
                .map(|t| t.to_string()),
            instruction: instruction.to_string(),
        }
    }
}

/// One consensus verdict, as returned by `POST /v1/ask`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsensusResult {
    /// Judge-selected answer text. May be empty.
    #[serde(default)]
    pub answer: String,
    /// Zero-based index of the winning runner. Signed because the backend
    /// reports `-1` when every runner failed. Display only; never used to
    /// index into `scores`.
    #[serde(default)]
    pub winner_index: i64,
    /// Number of runners that were asked to respond.
    #[serde(default)]
    pub runners: i64,
    /// Judge scores, positionally indexed by runner. May be absent or
    /// shorter than `runners`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<f64>>,
    /// Legacy tally from the pre-judge voting protocol. Still on the wire
    /// for older deployments; the scoreboard never reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes_per_candidate: Option<Vec<f64>>,
    /// Indices of runners that produced a usable answer. Absent means no
    /// runner participated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_indices: Option<Vec<i64>>,
    /// Per-runner failure messages. Diagnostic only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner_errors: Option<Vec<String>>,
    /// Opaque correlation id for this verdict. Required.
    pub consensus_id: String,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Whether the backend considers itself serviceable.
    pub ok: bool,
    /// Configured runner count.
    #[serde(default)]
    pub runners: i64,
}
