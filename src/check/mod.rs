//! Check orchestration
//!
//! - runner.rs: One package per run, emitting the availability gauge
//! - report.rs: Manual report over every package

pub mod report;
pub mod runner;

pub use report::{AvailabilityReport, PackageReport, build_report};
pub use runner::{CheckError, CheckOutcome, PackageCheck};
