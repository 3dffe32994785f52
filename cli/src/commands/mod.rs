//! Shared plumbing for CLI commands.

pub mod create;
pub mod delete;
pub mod edit;
pub mod find_user;
pub mod list;
pub mod login;
pub mod read;
pub mod register;
pub mod share;
pub mod whoami;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Error envelope returned by the server: `{"error": {"code", "message"}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Build an HTTP client, attaching the Bearer token when one is set.
pub fn build_client(token: Option<&str>) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .context("Token contains invalid header characters")?;
        headers.insert(AUTHORIZATION, value);
    }

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .context("Failed to build HTTP client")
}

/// Send a request and decode the JSON body, turning the server's error
/// envelope into a readable failure.
pub async fn make_request<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
    let response = request.send().await.context("Request failed")?;
    let status = response.status();
    let body = response.bytes().await.context("Failed to read response")?;

    if !status.is_success() {
        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(&body) {
            return Err(anyhow!(
                "{} ({}, HTTP {})",
                envelope.error.message,
                envelope.error.code,
                status.as_u16()
            ));
        }
        return Err(anyhow!("Server returned HTTP {}", status.as_u16()));
    }

    serde_json::from_slice(&body).context("Failed to decode response body")
}

/// Send a request that returns no body (204).
pub async fn make_request_empty(request: reqwest::RequestBuilder) -> Result<()> {
    let response = request.send().await.context("Request failed")?;
    let status = response.status();

    if !status.is_success() {
        let body = response.bytes().await.context("Failed to read response")?;
        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(&body) {
            return Err(anyhow!(
                "{} ({}, HTTP {})",
                envelope.error.message,
                envelope.error.code,
                status.as_u16()
            ));
        }
        return Err(anyhow!("Server returned HTTP {}", status.as_u16()));
    }
    Ok(())
}

/// Types that can describe themselves for humans.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Print either formatted text or raw JSON depending on the flag.
pub fn output<T: HumanReadable + serde::Serialize>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Render a timestamp for human output.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
