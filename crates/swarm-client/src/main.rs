//! CLI front-end for the SwarmOne consensus service.
//!
//! `ask` composes an instruction from task-form fields (or takes one raw),
//! submits it, and prints the verdict with the per-runner scoreboard.
//! `health` probes the backend. Ctrl-C cancels an in-flight request.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::info;

use swarm_client::{runner_scoreboard, ClientConfig, SwarmClient, TaskForm};

#[derive(Parser)]
#[command(name = "swarm-client")]
#[command(about = "Client for the SwarmOne judge-mode consensus service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the service (overrides SWARMONE_API_BASE)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a task to the swarm and print the verdict
    Ask {
        /// Short task name
        #[arg(long, default_value = "reply email")]
        task: String,

        /// Material the task operates on
        #[arg(long, default_value = "")]
        content: String,

        /// Expectations for the answer
        #[arg(long, default_value = "Professional; concise")]
        expectations: String,

        /// Provenance of the content
        #[arg(long, default_value = "")]
        source: String,

        /// Answer language (BCP 47 tag)
        #[arg(long, default_value = "en-US")]
        language: String,

        /// Prompt template id; pass an empty string to use the backend default
        #[arg(long, default_value = "task.reply.email.v1")]
        template_id: String,

        /// Raw instruction text, bypassing the task-form builder
        #[arg(long)]
        instruction: Option<String>,

        /// Print per-runner error messages reported by the backend
        #[arg(long)]
        show_errors: bool,
    },

    /// Probe the backend health endpoint
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_request_timeout(Duration::from_secs(secs));
    }
    let client = SwarmClient::new(config)?;

    match cli.command {
        Commands::Ask {
            task,
            content,
            expectations,
            source,
            language,
            template_id,
            instruction,
            show_errors,
        } => {
            let instruction = match instruction {
                Some(raw) => raw,
                None => {
                    let form = TaskForm {
                        task,
                        content,
                        expectations,
                        source,
                        language,
                    };
                    form.instruction()?
                }
            };
            tracing::debug!(%instruction, "composed instruction");

            run_ask(&client, &template_id, &instruction, show_errors).await?;
        }

        Commands::Health => {
            let status = client.health().await?;
            println!("ok: {} (runners: {})", status.ok, status.runners);
            if !status.ok {
                anyhow::bail!("backend reports not ok");
            }
        }
    }

    Ok(())
}

async fn run_ask(
    client: &SwarmClient,
    template_id: &str,
    instruction: &str,
    show_errors: bool,
) -> Result<()> {
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupt received, cancelling request");
                cancel.cancel();
            }
        });
    }

    info!(template_id, "submitting task to swarm");
    let verdict = client
        .ask(Some(template_id), instruction, Some(&cancel))
        .await?;

    println!("Answer:\n{}\n", verdict.answer);
    println!("Winner: Runner #{}", verdict.winner_index);
    println!("Scores:");
    for row in runner_scoreboard(&verdict) {
        println!("  {}: {}", row.label, row.display_value);
    }
    if show_errors {
        let errors: Vec<(usize, &String)> = verdict
            .runner_errors
            .as_deref()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_empty())
            .collect();
        if !errors.is_empty() {
            println!("Runner errors:");
            for (i, err) in errors {
                println!("  Runner #{i}: {err}");
            }
        }
    }
    println!("Consensus ID: {}", verdict.consensus_id);

    Ok(())
}
