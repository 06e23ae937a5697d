//! Domain ports for the hexagonal boundary.
//!
//! Each port is a narrow contract the resolution core consumes: candidate
//! lookup, organization membership, and outcome counting. Adapters live in
//! [`crate::outbound`]; `Fixture*`/`NoOp*` implementations here back unit
//! tests that do not exercise the port.

mod macros;
pub(crate) use macros::define_port_error;

mod candidate_source;
mod org_membership;
mod resolution_metrics;

#[cfg(test)]
pub use candidate_source::MockCandidateSource;
pub use candidate_source::{CandidateSource, CandidateSourceError, FixtureCandidateSource};
#[cfg(test)]
pub use org_membership::MockOrgMembershipQuery;
pub use org_membership::{FixtureOrgMembershipQuery, OrgMembershipError, OrgMembershipQuery};
#[cfg(test)]
pub use resolution_metrics::MockResolutionMetrics;
pub use resolution_metrics::{
    NoOpResolutionMetrics, ResolutionCounter, ResolutionMetrics, ResolutionMetricsError,
};
