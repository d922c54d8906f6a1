//! Metadata source trait and the Maven repository implementation

#[cfg(test)]
use mockall::automock;

use tracing::{debug, warn};

use crate::version::document::VersionDocument;
use crate::version::error::FetchError;

/// Trait for fetching the version listing of the monitored artifact
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetches and parses the version listing
    ///
    /// # Returns
    /// * `Ok(VersionDocument)` - The parsed listing
    /// * `Err(FetchError)` - If the document cannot be fetched or parsed
    async fn fetch_document(&self) -> Result<VersionDocument, FetchError>;
}

/// Reads `maven-metadata.xml` from a Maven repository
pub struct MavenMetadataSource {
    client: reqwest::Client,
    url: String,
}

impl MavenMetadataSource {
    pub fn new(client: reqwest::Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl MetadataSource for MavenMetadataSource {
    async fn fetch_document(&self) -> Result<VersionDocument, FetchError> {
        debug!("Fetching version metadata from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();

        if !status.is_success() {
            warn!("Metadata repository returned status {}: {}", status, self.url);
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;

        VersionDocument::parse(&body).inspect_err(|e| {
            warn!("Failed to parse metadata from {}: {}", self.url, e);
        })
    }
}
