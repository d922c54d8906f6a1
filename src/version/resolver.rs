//! Resolution of the latest weekly and stable versions
//!
//! Both versions come from one fetched [`VersionDocument`]; the document is
//! passed explicitly and dropped at the end of the run.

use tracing::info;

use crate::version::document::VersionDocument;
use crate::version::error::ResolveError;
use crate::version::ordering::find_latest_stable;
use crate::version::source::MetadataSource;

/// Weekly and stable versions resolved for one check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersions {
    /// Rolling release declared as `versioning/latest`
    pub weekly: String,
    /// Highest `major.minor.patch` release listed
    pub stable: String,
}

impl ResolvedVersions {
    pub fn from_document(document: &VersionDocument) -> Result<Self, ResolveError> {
        Ok(Self {
            weekly: latest_weekly_version(document)?.to_string(),
            stable: latest_stable_version(document)?.to_string(),
        })
    }
}

/// The document's declared latest (rolling) version
pub fn latest_weekly_version(document: &VersionDocument) -> Result<&str, ResolveError> {
    document.latest().ok_or(ResolveError::MissingLatest)
}

/// The highest stable version listed in the document
pub fn latest_stable_version(document: &VersionDocument) -> Result<&str, ResolveError> {
    find_latest_stable(document.versions()).ok_or(ResolveError::EmptyVersionSet)
}

/// Fetch the listing once and resolve both versions from it
pub async fn resolve_versions(
    source: &dyn MetadataSource,
) -> Result<ResolvedVersions, ResolveError> {
    let document = source.fetch_document().await?;
    let versions = ResolvedVersions::from_document(&document)?;

    info!(
        "Resolved latest weekly version {} and stable version {}",
        versions.weekly, versions.stable
    );

    Ok(versions)
}
