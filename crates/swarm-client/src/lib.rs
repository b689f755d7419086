//! SwarmOne Consensus Client Library
//!
//! This library provides:
//! - A typed HTTP client for the SwarmOne judge-mode consensus service
//! - Score reconciliation turning a raw verdict into a per-runner scoreboard
//! - The task-form instruction builder used by the CLI front-end
//!
//! # Flow
//!
//! A caller composes an instruction (usually via [`TaskForm`]), submits it
//! with [`SwarmClient::ask`], and renders the returned
//! [`ConsensusResult`] through [`runner_scoreboard`]. The service fans the
//! instruction out to its runners and judges the answers; this crate never
//! re-runs that arbitration, it only presents the verdict.

pub mod client;
pub mod config;
pub mod consensus;
pub mod error;
pub mod scoreboard;
pub mod task;

// Re-export the client surface
pub use client::SwarmClient;
pub use config::ClientConfig;
pub use error::RequestError;

// Re-export wire types
pub use consensus::{AskRequest, ConsensusResult, HealthStatus};

// Re-export scoreboard types
pub use scoreboard::{runner_scoreboard, RunnerView};

// Re-export the instruction builder
pub use task::TaskForm;
