//! Version resolution layer
//!
//! Fetches the artifact's version listing and derives the two versions the
//! download endpoints are built from.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│  Document   │────▶│  Resolver   │
//! │  (fetch)    │     │  (parse)    │     │(weekly,LTS) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │  Ordering   │
//!                                         │(version cmp)│
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`source`]: Metadata source trait and Maven repository implementation
//! - [`document`]: Parsed `maven-metadata.xml`
//! - [`ordering`]: Stable version filter and ordering
//! - [`resolver`]: Weekly and stable version resolution
//! - [`error`]: Error types for fetching and resolution

pub mod document;
pub mod error;
pub mod ordering;
pub mod resolver;
pub mod source;

pub use document::VersionDocument;
pub use error::{FetchError, ResolveError};
pub use resolver::{ResolvedVersions, resolve_versions};
pub use source::{MavenMetadataSource, MetadataSource};
