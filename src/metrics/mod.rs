//! Metric output
//!
//! - sink.rs: `MetricSample` and the `MetricSink` trait
//! - statsd.rs: cadence-backed sink for a DogStatsD agent or stdout

pub mod sink;
pub mod statsd;

pub use sink::{MetricError, MetricSample, MetricSink};
pub use statsd::StatsdSink;
