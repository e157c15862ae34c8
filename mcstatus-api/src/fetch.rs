//! One GET against the status API, blocking or async.
//!
//! Every call builds its own HTTP client with idle pooling disabled, so no
//! connection outlives the lookup that opened it.

use std::time::Duration;

use reqwest::{
    StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde_json::Value;
use tracing::{debug, trace};

use crate::Error;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetch a status document without blocking the current thread.
pub(crate) async fn fetch(url: &str, timeout: Duration) -> Result<Value, Error> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(0)
        .default_headers(default_headers())
        .user_agent(USER_AGENT)
        .build()
        .map_err(Error::Connection)?;
    debug!(url, ?timeout, "Requesting server status");
    let response = client
        .get(url)
        .query(&[("timeout", timeout_param(timeout))])
        .send()
        .await
        .map_err(classify)?;
    let status = response.status();
    let body = response.text().await.map_err(classify)?;
    into_document(status, body)
}

/// Fetch a status document, blocking the current thread until it arrives.
///
/// Must not be called from within an async runtime.
pub(crate) fn fetch_blocking(url: &str, timeout: Duration) -> Result<Value, Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(0)
        .default_headers(default_headers())
        .user_agent(USER_AGENT)
        .build()
        .map_err(Error::Connection)?;
    debug!(url, ?timeout, "Requesting server status");
    let response = client
        .get(url)
        .query(&[("timeout", timeout_param(timeout))])
        .send()
        .map_err(classify)?;
    let status = response.status();
    let body = response.text().map_err(classify)?;
    into_document(status, body)
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// The API takes its own timeout in (possibly fractional) seconds.
pub(crate) fn timeout_param(timeout: Duration) -> String {
    timeout.as_secs_f64().to_string()
}

fn classify(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::Timeout(error)
    } else {
        Error::Connection(error)
    }
}

fn into_document(status: StatusCode, body: String) -> Result<Value, Error> {
    trace!(%status, body_len = body.len(), "Status API responded");
    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
            body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}
