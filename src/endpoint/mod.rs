//! Download endpoints of the monitored packages
//!
//! - types.rs: Package identifiers (format × channel)
//! - builder.rs: URL templates and the endpoint table

pub mod builder;
pub mod types;

pub use builder::{Endpoint, EndpointTable, build_endpoints, download_url};
pub use types::{Channel, PackageFormat, PackageId, UnsupportedPackage};
