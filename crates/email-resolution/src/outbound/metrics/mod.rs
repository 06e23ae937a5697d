//! Outbound adapters for metrics exporting.
//!
//! Prometheus-backed implementation of the resolution metrics port. All
//! adapters here are gated behind the `metrics` feature.

mod prometheus_resolution;

pub use prometheus_resolution::PrometheusResolutionMetrics;
