use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Invalid metadata document: {0}")]
    InvalidDocument(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to fetch version metadata: {0}")]
    Fetch(#[from] FetchError),

    #[error("Metadata document does not declare a latest version")]
    MissingLatest,

    #[error("No stable version found in metadata document")]
    EmptyVersionSet,
}
