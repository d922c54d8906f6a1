//! Metric sample and sink trait

#[cfg(test)]
use mockall::automock;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricError {
    #[error("Failed to open metrics socket: {0}")]
    Socket(#[from] std::io::Error),

    #[error("Failed to send metric: {0}")]
    Send(#[from] cadence::MetricError),
}

/// A single gauge observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSample {
    pub name: String,
    pub value: u64,
    /// `(key, value)` pairs, rendered as `key:value` tags
    pub tags: Vec<(String, String)>,
}

impl MetricSample {
    pub fn gauge(name: &str, value: u64, tags: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            value,
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Trait for publishing metric samples to a monitoring system
#[cfg_attr(test, automock)]
pub trait MetricSink: Send + Sync {
    fn gauge(&self, sample: &MetricSample) -> Result<(), MetricError>;
}
