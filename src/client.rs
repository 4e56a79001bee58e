use anyhow::{Context, Result};
use serde::Serialize;
use std::time::Duration;

use crate::scoring::{ProjectScorer, ScoreResult};
use crate::server::ErrorBody;

#[derive(Debug, Serialize)]
struct SimulateRequest<'a> {
    #[serde(rename = "userInput")]
    user_input: &'a str,
}

/// Where a simulation result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Remote,
    LocalFallback,
}

/// POST `text` to a running server's `/api/simulate`.
///
/// Non-2xx responses are turned into errors carrying the server's `error`
/// message.
pub async fn simulate_remote(base_url: &str, text: &str, timeout: Duration) -> Result<ScoreResult> {
    let url = format!("{}/api/simulate", base_url.trim_end_matches('/'));
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("harambee-trust/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .post(&url)
        .json(&SimulateRequest { user_input: text })
        .send()
        .await
        .with_context(|| format!("Failed to reach {}", url))?;

    let status = response.status();
    if !status.is_success() {
        let detail = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| "no error detail".to_string());
        anyhow::bail!("Server returned {}: {}", status, detail);
    }

    response
        .json::<ScoreResult>()
        .await
        .context("Failed to parse simulation response")
}

/// Try the server first; on any failure score locally instead of retrying.
pub async fn simulate_with_fallback(
    base_url: &str,
    text: &str,
    timeout: Duration,
    local: &ProjectScorer,
) -> (ScoreResult, Source) {
    match simulate_remote(base_url, text, timeout).await {
        Ok(result) => (result, Source::Remote),
        Err(e) => {
            tracing::warn!("Remote simulation failed, scoring locally: {:#}", e);
            (local.score(text), Source::LocalFallback)
        }
    }
}
