//! Classification of a download probe

use reqwest::StatusCode;

use crate::endpoint::Endpoint;

/// How a probe of a download URL ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered 200
    Available,
    /// The server answered with a 2xx status other than 200
    UnexpectedStatus { status: u16 },
    /// The server answered 404
    NotFound,
    /// The server answered with any other non-2xx status
    HttpError { status: u16, reason: String },
    /// No HTTP response was received (DNS, connection, TLS, timeout)
    TransportFailure { detail: String },
}

impl ProbeOutcome {
    /// Classify the final status of a response, after redirects were followed
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::OK {
            ProbeOutcome::Available
        } else if status == StatusCode::NOT_FOUND {
            ProbeOutcome::NotFound
        } else if status.is_success() {
            ProbeOutcome::UnexpectedStatus {
                status: status.as_u16(),
            }
        } else {
            ProbeOutcome::HttpError {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            }
        }
    }

    /// Only 2xx responses count as available
    pub fn is_available(&self) -> bool {
        matches!(
            self,
            ProbeOutcome::Available | ProbeOutcome::UnexpectedStatus { .. }
        )
    }
}

/// Outcome of probing one endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub endpoint: Endpoint,
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn new(endpoint: Endpoint, outcome: ProbeOutcome) -> Self {
        Self { endpoint, outcome }
    }

    /// Gauge value: 1 when available, 0 otherwise
    pub fn value(&self) -> u64 {
        u64::from(self.outcome.is_available())
    }

    /// Human readable explanation for anything but a plain 200
    pub fn diagnostic(&self) -> Option<String> {
        let package = self.endpoint.package;
        let url = &self.endpoint.url;

        match &self.outcome {
            ProbeOutcome::Available => None,
            ProbeOutcome::UnexpectedStatus { status } => Some(format!(
                "Return code for {package} package at {url} should be 200 but is {status}"
            )),
            ProbeOutcome::NotFound => Some(format!("{package} package not found on {url}")),
            ProbeOutcome::HttpError { status, reason } => Some(format!(
                "Something went wrong with url {url} for {package} package: HTTP Error {status}: {reason}"
            )),
            ProbeOutcome::TransportFailure { detail } => Some(format!(
                "Could not reach {url} for {package} package: {detail}"
            )),
        }
    }
}
