//! StatsD sink built on a cadence client
//!
//! Samples are sent with DogStatsD tags either to a UDP agent or, for dry
//! runs, printed to stdout.

use std::io;
use std::net::UdpSocket;
use std::panic::RefUnwindSafe;

use cadence::prelude::*;
use cadence::{StatsdClient, UdpMetricSink};
use tracing::debug;

use crate::metrics::sink::{MetricError, MetricSample, MetricSink};

/// Cadence sink writing each formatted metric as a line on stdout
#[derive(Debug, Default)]
pub struct StdoutMetricSink;

impl cadence::MetricSink for StdoutMetricSink {
    fn emit(&self, metric: &str) -> io::Result<usize> {
        println!("{}", metric);
        Ok(metric.len())
    }
}

/// Publishes samples through a [`StatsdClient`]
pub struct StatsdSink {
    client: StatsdClient,
}

impl StatsdSink {
    /// Wrap any cadence sink. Metric names are sent without a prefix.
    pub fn from_sink<T>(sink: T) -> Self
    where
        T: cadence::MetricSink + Send + Sync + RefUnwindSafe + 'static,
    {
        Self {
            client: StatsdClient::from_sink("", sink),
        }
    }

    /// Send to the agent at `address` (e.g. "127.0.0.1:8125")
    pub fn udp(address: &str) -> Result<Self, MetricError> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.set_nonblocking(true)?;
        let sink = UdpMetricSink::from(address, socket)?;
        Ok(Self::from_sink(sink))
    }

    /// Print metrics instead of sending them
    pub fn stdout() -> Self {
        Self::from_sink(StdoutMetricSink)
    }
}

impl MetricSink for StatsdSink {
    fn gauge(&self, sample: &MetricSample) -> Result<(), MetricError> {
        debug!("Sending gauge {}={}", sample.name, sample.value);

        let mut builder = self.client.gauge_with_tags(&sample.name, sample.value);
        for (key, value) in &sample.tags {
            builder = builder.with_tag(key, value);
        }
        builder.try_send()?;
        Ok(())
    }
}
