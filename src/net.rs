// src/net.rs
// Single blocking form submission against the ModelWeb endpoint.

use std::time::Duration;

use crate::config::consts::{ENDPOINT, TIMEOUT_SECS, USER_AGENT};
use crate::error::Error;
use crate::params::Params;

/// Submit the form payload and return the response body as text.
///
/// One POST, no retries. A network failure or non-2xx status surfaces as
/// `Error::Transport` immediately; retrying is the caller's decision.
pub fn submit(params: &Params) -> Result<String, Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.post(ENDPOINT).form(params.pairs()).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Transport(format!("HTTP {status} from {ENDPOINT}")));
    }
    Ok(resp.text()?)
}
