//! Test doubles for probes and metric sinks

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use package_availability::endpoint::Endpoint;
use package_availability::metrics::{MetricError, MetricSample, MetricSink};
use package_availability::probe::{ProbeOutcome, Prober};

/// Prober answering from a fixed table keyed by package identifier.
/// Packages missing from the table are reported available.
#[derive(Default)]
pub struct StaticProber {
    outcomes: HashMap<String, ProbeOutcome>,
    probed: Mutex<Vec<String>>,
}

impl StaticProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(mut self, package: &str, outcome: ProbeOutcome) -> Self {
        self.outcomes.insert(package.to_string(), outcome);
        self
    }

    /// URLs probed so far, in order
    pub fn probed_urls(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prober for StaticProber {
    async fn probe(&self, endpoint: &Endpoint) -> ProbeOutcome {
        self.probed.lock().unwrap().push(endpoint.url.clone());
        self.outcomes
            .get(endpoint.package.as_str())
            .cloned()
            .unwrap_or(ProbeOutcome::Available)
    }
}

/// Sink keeping every emitted sample
#[derive(Default)]
pub struct RecordingSink {
    samples: Mutex<Vec<MetricSample>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> Vec<MetricSample> {
        self.samples.lock().unwrap().clone()
    }
}

impl MetricSink for RecordingSink {
    fn gauge(&self, sample: &MetricSample) -> Result<(), MetricError> {
        self.samples.lock().unwrap().push(sample.clone());
        Ok(())
    }
}

/// Build a `maven-metadata.xml` body
pub fn metadata_xml(latest: &str, versions: &[&str]) -> String {
    let versions: String = versions
        .iter()
        .map(|v| format!("      <version>{v}</version>\n"))
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>org.jenkins-ci.main</groupId>
  <artifactId>jenkins-war</artifactId>
  <versioning>
    <latest>{latest}</latest>
    <release>{latest}</release>
    <versions>
{versions}    </versions>
  </versioning>
</metadata>
"#
    )
}
