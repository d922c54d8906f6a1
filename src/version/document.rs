//! Parsed representation of a Maven `maven-metadata.xml` document

use serde::Deserialize;

use crate::version::error::FetchError;

#[derive(Debug, Deserialize)]
struct MavenMetadata {
    #[serde(default)]
    versioning: Versioning,
}

#[derive(Debug, Default, Deserialize)]
struct Versioning {
    latest: Option<String>,
    #[serde(default)]
    versions: Versions,
}

#[derive(Debug, Default, Deserialize)]
struct Versions {
    #[serde(default)]
    version: Vec<String>,
}

/// Version listing fetched once per check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDocument {
    latest: Option<String>,
    versions: Vec<String>,
}

impl VersionDocument {
    pub fn new(latest: Option<String>, versions: Vec<String>) -> Self {
        Self { latest, versions }
    }

    /// Parses the body of a `maven-metadata.xml` document.
    ///
    /// Only `versioning/latest` and `versioning/versions/version` are read;
    /// every other element is ignored.
    pub fn parse(xml: &str) -> Result<Self, FetchError> {
        let metadata: MavenMetadata =
            quick_xml::de::from_str(xml).map_err(|e| FetchError::InvalidDocument(e.to_string()))?;

        let latest = metadata
            .versioning
            .latest
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let versions = metadata
            .versioning
            .versions
            .version
            .into_iter()
            .map(|v| v.trim().to_string())
            .collect();

        Ok(Self::new(latest, versions))
    }

    /// Text of `versioning/latest`, if present and non-empty
    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }

    /// Every listed version in document order
    pub fn versions(&self) -> &[String] {
        &self.versions
    }
}
