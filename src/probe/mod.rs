//! Availability probing of download endpoints

pub mod outcome;
pub mod prober;

pub use outcome::{ProbeOutcome, ProbeResult};
pub use prober::{HttpProber, Prober};
