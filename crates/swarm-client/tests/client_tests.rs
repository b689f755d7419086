//! End-to-end client behavior against a mock HTTP backend.
//!
//! Covers wire-body shape, status and error mapping, cancellation of an
//! in-flight request, and the health probe. No real swarm service required.

use std::time::{Duration, Instant};

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use tokio_util::sync::CancellationToken;

use swarm_client::{ClientConfig, RequestError, SwarmClient};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn client_for(server: &ServerGuard) -> SwarmClient {
    SwarmClient::new(ClientConfig::default().with_base_url(server.url()))
        .expect("client construction")
}

// ── Verdict retrieval ────────────────────────────────────────────────────────

#[tokio::test]
async fn ask_returns_the_parsed_verdict() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/ask")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "answer": "Dear Alice, thanks for reaching out.",
                "winner_index": 2,
                "runners": 3,
                "scores": [0.91, 0.15, 0.97],
                "votes_per_candidate": [1.0, 0.0, 2.0],
                "included_indices": [0, 2],
                "runner_errors": ["", "timeout", ""],
                "consensus_id": "c-123"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let verdict = client
        .ask(Some("task.reply.email.v1"), "finish it", None)
        .await
        .unwrap();

    assert_eq!(verdict.answer, "Dear Alice, thanks for reaching out.");
    assert_eq!(verdict.winner_index, 2);
    assert_eq!(verdict.runners, 3);
    assert_eq!(verdict.scores, Some(vec![0.91, 0.15, 0.97]));
    assert_eq!(verdict.included_indices, Some(vec![0, 2]));
    assert_eq!(verdict.consensus_id, "c-123");
    mock.assert_async().await;
}

#[tokio::test]
async fn request_body_carries_the_template_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/ask")
        .match_body(Matcher::Json(json!({
            "template_id": "task.reply.email.v1",
            "instruction": "finish it"
        })))
        .with_status(200)
        .with_body(json!({"consensus_id": "c-1"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .ask(Some("task.reply.email.v1"), "finish it", None)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn blank_template_id_is_left_off_the_wire() {
    let mut server = Server::new_async().await;
    // Exact-body match: a body containing a template_id key would not match
    // and the call would fail.
    let mock = server
        .mock("POST", "/v1/ask")
        .match_body(Matcher::Json(json!({"instruction": "finish it"})))
        .with_status(200)
        .with_body(json!({"consensus_id": "c-1"}).to_string())
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    client.ask(None, "finish it", None).await.unwrap();
    client.ask(Some(""), "finish it", None).await.unwrap();
    mock.assert_async().await;
}

// ── Error mapping ────────────────────────────────────────────────────────────

#[tokio::test]
async fn error_status_surfaces_the_body_text() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/ask")
        .with_status(429)
        .with_body("rate limited")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.ask(None, "finish it", None).await.unwrap_err();

    assert_eq!(err.to_string(), "rate limited");
    assert_eq!(err.status(), Some(429));
}

#[tokio::test]
async fn empty_error_body_reports_the_http_code() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/ask")
        .with_status(503)
        .with_body("")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.ask(None, "finish it", None).await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP 503");
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn unparseable_success_body_is_malformed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/ask")
        .with_status(200)
        .with_body("runner soup")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.ask(None, "finish it", None).await.unwrap_err();

    assert!(matches!(err, RequestError::Malformed(_)));
    assert!(err.status().is_none());
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        SwarmClient::new(ClientConfig::default().with_base_url(format!("http://{addr}"))).unwrap();
    let err = client.ask(None, "finish it", None).await.unwrap_err();

    assert!(matches!(err, RequestError::Transport(_)));
    assert!(err.status().is_none());
}

// ── Cancellation ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn token_cancels_an_inflight_request() {
    // A listener that accepts connections and never answers, so the request
    // stays pending until the token fires.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    let client =
        SwarmClient::new(ClientConfig::default().with_base_url(format!("http://{addr}"))).unwrap();
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            cancel.cancel();
        });
    }

    let started = Instant::now();
    let err = client
        .ask(None, "hang forever", Some(&cancel))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    // Well under the 120s request timeout: the token, not the timer, ended it.
    assert!(started.elapsed() < Duration::from_secs(5));
}

// ── Health probe ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_backend_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"ok": true, "runners": 3}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let status = client.health().await.unwrap();

    assert!(status.ok);
    assert_eq!(status.runners, 3);
}

#[tokio::test]
async fn health_maps_error_statuses_like_ask() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.health().await.unwrap_err();

    assert_eq!(err.to_string(), "internal");
    assert_eq!(err.status(), Some(500));
}
