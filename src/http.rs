//! Shared HTTP client construction

use std::time::Duration;

use crate::config::USER_AGENT;

/// Build the client used for both the metadata fetch and the probes.
///
/// Without `timeout` the client waits as long as the transport allows.
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, reqwest::Error> {
    let builder = reqwest::Client::builder().user_agent(USER_AGENT);
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    builder.build()
}
