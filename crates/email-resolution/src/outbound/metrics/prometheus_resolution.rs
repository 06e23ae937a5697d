//! Prometheus adapter for resolution outcome counters.

use async_trait::async_trait;
use prometheus::{CounterVec, Opts, Registry};

use crate::domain::ports::{ResolutionCounter, ResolutionMetrics, ResolutionMetricsError};

/// Prometheus-backed resolution metrics recorder.
///
/// Records every resolution outcome as an increment to a single counter
/// metric with an `outcome` label.
///
/// # Metric Specification
///
/// - **Name**: `auth_email_resolution_total`
/// - **Type**: Counter
/// - **Labels**:
///   - `outcome`: `by_verification`, `by_org_membership`,
///     `by_primary_email`, or `no_resolution`
pub struct PrometheusResolutionMetrics {
    resolutions_total: CounterVec,
}

impl PrometheusResolutionMetrics {
    /// Create and register the metric with the given registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the metric cannot be registered (e.g., if a
    /// metric with the same name already exists in the registry).
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let resolutions_total = CounterVec::new(
            Opts::new(
                "auth_email_resolution_total",
                "Total email resolutions by outcome",
            ),
            &["outcome"],
        )?;
        registry.register(Box::new(resolutions_total.clone()))?;
        Ok(Self { resolutions_total })
    }

    /// Label value for one counter variant.
    const fn outcome_label(counter: ResolutionCounter) -> &'static str {
        match counter {
            ResolutionCounter::ByVerification => "by_verification",
            ResolutionCounter::ByOrgMembership => "by_org_membership",
            ResolutionCounter::ByPrimaryEmail => "by_primary_email",
            ResolutionCounter::NoResolution => "no_resolution",
        }
    }
}

#[async_trait]
impl ResolutionMetrics for PrometheusResolutionMetrics {
    async fn increment(&self, counter: ResolutionCounter) -> Result<(), ResolutionMetricsError> {
        self.resolutions_total
            .with_label_values(&[Self::outcome_label(counter)])
            .inc();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_metric_with_registry() {
        let registry = Registry::new();
        let _metrics = PrometheusResolutionMetrics::new(&registry)
            .expect("metric registration should succeed");

        let families = registry.gather();
        assert!(
            families
                .iter()
                .any(|f| f.name() == "auth_email_resolution_total"),
            "metric should be registered",
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = Registry::new();
        let _first = PrometheusResolutionMetrics::new(&registry)
            .expect("first registration should succeed");
        assert!(
            PrometheusResolutionMetrics::new(&registry).is_err(),
            "second registration should fail",
        );
    }

    #[tokio::test]
    async fn increment_bumps_the_labelled_counter() {
        let registry = Registry::new();
        let metrics = PrometheusResolutionMetrics::new(&registry)
            .expect("metric registration should succeed");

        metrics
            .increment(ResolutionCounter::ByVerification)
            .await
            .expect("recording should succeed");
        metrics
            .increment(ResolutionCounter::ByVerification)
            .await
            .expect("recording should succeed");
        metrics
            .increment(ResolutionCounter::NoResolution)
            .await
            .expect("recording should succeed");

        let verified = metrics
            .resolutions_total
            .with_label_values(&["by_verification"]);
        let inconclusive = metrics
            .resolutions_total
            .with_label_values(&["no_resolution"]);
        assert_eq!(verified.get() as u64, 2, "counter should be incremented twice");
        assert_eq!(inconclusive.get() as u64, 1);
    }
}
