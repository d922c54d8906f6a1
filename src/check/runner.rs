//! Single-package availability check

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::METRIC_NAME;
use crate::endpoint::{Endpoint, PackageId, download_url};
use crate::metrics::{MetricError, MetricSample, MetricSink};
use crate::probe::{ProbeResult, Prober};
use crate::version::error::ResolveError;
use crate::version::resolver::resolve_versions;
use crate::version::source::MetadataSource;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Metric(#[from] MetricError),
}

/// What a check run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The package is not one of the supported identifiers; nothing was emitted
    Unsupported,
    /// The package was probed and its gauge emitted
    Reported(ProbeResult),
}

/// Checks one package per run and reports its availability gauge
pub struct PackageCheck {
    source: Arc<dyn MetadataSource>,
    prober: Arc<dyn Prober>,
    sink: Arc<dyn MetricSink>,
    host: String,
}

impl PackageCheck {
    pub fn new(
        source: Arc<dyn MetadataSource>,
        prober: Arc<dyn Prober>,
        sink: Arc<dyn MetricSink>,
        host: &str,
    ) -> Self {
        Self {
            source,
            prober,
            sink,
            host: host.to_string(),
        }
    }

    /// Run the check for `package`.
    ///
    /// Unsupported packages are logged and skipped without touching the
    /// network. Version resolution failures abort the run before any metric
    /// is emitted. Probe failures are reported as a 0 gauge.
    pub async fn run(&self, package: &str) -> Result<CheckOutcome, CheckError> {
        info!("Checking availability of package {}", package);

        let Ok(package_id) = package.parse::<PackageId>() else {
            warn!("Package {} is not supported", package);
            return Ok(CheckOutcome::Unsupported);
        };

        let versions = resolve_versions(self.source.as_ref())
            .await
            .inspect_err(|e| warn!("Error when resolving versions for {}: {}", package, e))?;

        let endpoint = Endpoint {
            package: package_id,
            url: download_url(package_id, &versions.weekly, &versions.stable, &self.host),
        };

        let outcome = self.prober.probe(&endpoint).await;
        let result = ProbeResult::new(endpoint, outcome);

        if let Some(diagnostic) = result.diagnostic() {
            warn!("{}", diagnostic);
        }

        let sample = MetricSample::gauge(
            METRIC_NAME,
            result.value(),
            &[("package", package_id.as_str())],
        );
        self.sink.gauge(&sample)?;

        info!(
            "Package {} at {} reported as {}",
            package_id,
            result.endpoint.url,
            result.value()
        );

        Ok(CheckOutcome::Reported(result))
    }
}
