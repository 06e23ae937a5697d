//! Port for counting resolution outcomes.
//!
//! Observability of which heuristic settled (or failed to settle) an
//! ambiguous address, without coupling the pipeline to a metrics backend.
//! The pipeline treats this sink as fire-and-forget: recording failures are
//! logged and never affect the resolution outcome.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors exposed when recording resolution metrics.
    pub enum ResolutionMetricsError {
        /// Metric exporter rejected the write.
        Export { message: String } =>
            "resolution metrics exporter failed: {message}",
    }
}

/// Counters the pipeline increments, one per way a resolution can settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionCounter {
    /// The verification filter narrowed to a single candidate.
    ByVerification,
    /// The organization membership filter narrowed to a single candidate.
    ByOrgMembership,
    /// The primary-address filter narrowed to a single candidate.
    ByPrimaryEmail,
    /// Every step ran and two or more candidates remained.
    NoResolution,
}

impl ResolutionCounter {
    /// Dotted counter name for statsd-style sinks.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ByVerification => "auth.email_resolution.by_verification",
            Self::ByOrgMembership => "auth.email_resolution.by_org_membership",
            Self::ByPrimaryEmail => "auth.email_resolution.by_primary_email",
            Self::NoResolution => "auth.email_resolution.no_resolution",
        }
    }
}

/// Metrics recording port for resolution outcomes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResolutionMetrics: Send + Sync {
    /// Increment a resolution counter by one.
    async fn increment(&self, counter: ResolutionCounter) -> Result<(), ResolutionMetricsError>;
}

/// No-op implementation for when metrics are disabled or in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpResolutionMetrics;

#[async_trait]
impl ResolutionMetrics for NoOpResolutionMetrics {
    async fn increment(&self, _counter: ResolutionCounter) -> Result<(), ResolutionMetricsError> {
        Ok(())
    }
}
