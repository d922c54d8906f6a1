//! Prober trait and the HTTP implementation

#[cfg(test)]
use mockall::automock;

use tracing::debug;

use crate::endpoint::Endpoint;
use crate::probe::outcome::ProbeOutcome;

/// Trait for checking whether a download endpoint is reachable
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    /// Probes the endpoint once. Failures are part of the outcome, never an error.
    async fn probe(&self, endpoint: &Endpoint) -> ProbeOutcome;
}

/// Probes endpoints with a single GET request
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Issue the GET and classify the response. The body is never read.
    pub async fn probe_url(&self, url: &str) -> ProbeOutcome {
        match self.client.get(url).send().await {
            Ok(response) => {
                debug!("{} answered {}", url, response.status());
                ProbeOutcome::from_status(response.status())
            }
            Err(e) => ProbeOutcome::TransportFailure {
                detail: e.to_string(),
            },
        }
    }
}

#[async_trait::async_trait]
impl Prober for HttpProber {
    async fn probe(&self, endpoint: &Endpoint) -> ProbeOutcome {
        self.probe_url(&endpoint.url).await
    }
}
