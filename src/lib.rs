pub mod check;
pub mod config;
pub mod endpoint;
pub mod http;
pub mod logging;
pub mod metrics;
pub mod probe;
pub mod version;
