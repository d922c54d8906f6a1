//! Availability report over every supported package
//!
//! Used for manual runs: resolves both versions and probes each endpoint in
//! turn, without emitting metrics.

use std::fmt;

use serde::Serialize;

use crate::endpoint::build_endpoints;
use crate::probe::{ProbeResult, Prober};
use crate::version::error::ResolveError;
use crate::version::resolver::resolve_versions;
use crate::version::source::MetadataSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityReport {
    pub weekly_version: String,
    pub stable_version: String,
    pub packages: Vec<PackageReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    pub package: String,
    pub url: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl From<&ProbeResult> for PackageReport {
    fn from(result: &ProbeResult) -> Self {
        Self {
            package: result.endpoint.package.to_string(),
            url: result.endpoint.url.clone(),
            available: result.outcome.is_available(),
            diagnostic: result.diagnostic(),
        }
    }
}

/// Resolve versions once, then probe every endpoint sequentially
pub async fn build_report(
    source: &dyn MetadataSource,
    prober: &dyn Prober,
    host: &str,
) -> Result<AvailabilityReport, ResolveError> {
    let versions = resolve_versions(source).await?;
    let endpoints = build_endpoints(&versions.weekly, &versions.stable, host);

    let mut packages = Vec::with_capacity(endpoints.len());
    for endpoint in endpoints.into_values() {
        let outcome = prober.probe(&endpoint).await;
        packages.push(PackageReport::from(&ProbeResult::new(endpoint, outcome)));
    }

    Ok(AvailabilityReport {
        weekly_version: versions.weekly,
        stable_version: versions.stable,
        packages,
    })
}

impl fmt::Display for AvailabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Latest weekly version: {}", self.weekly_version)?;
        writeln!(f, "Latest stable version: {}", self.stable_version)?;
        for package in &self.packages {
            if let Some(diagnostic) = &package.diagnostic {
                writeln!(f, "{}", diagnostic)?;
            }
            let availability = if package.available {
                "available"
            } else {
                "not available"
            };
            writeln!(
                f,
                "Latest version for package {} {} from {}",
                package.package, availability, package.url
            )?;
        }
        Ok(())
    }
}
