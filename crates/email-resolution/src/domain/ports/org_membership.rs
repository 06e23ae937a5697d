//! Port for batched organization membership lookups.
//!
//! This is the only external dependency the pipeline consults mid-flight,
//! so it is also the only place transient latency or failure surfaces. The
//! pipeline batches every remaining candidate into a single call; adapters
//! must not be invoked once per candidate.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::{AccountId, OrgId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by membership oracle adapters.
    pub enum OrgMembershipError {
        /// The membership service could not be reached.
        Connection { message: String } =>
            "membership service connection failed: {message}",
        /// The lookup failed or exceeded the caller's deadline.
        Lookup { message: String } =>
            "membership lookup failed: {message}",
    }
}

/// Port answering "which of these accounts belong to this organization?".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrgMembershipQuery: Send + Sync {
    /// Return the subset of `account_ids` that are members of `organization`.
    ///
    /// An empty `account_ids` slice must yield an empty set. A failed or
    /// timed-out lookup must be reported as an error, never as an empty
    /// result: the pipeline treats the two very differently.
    async fn members_among(
        &self,
        organization: &OrgId,
        account_ids: &[AccountId],
    ) -> Result<HashSet<AccountId>, OrgMembershipError>;
}

/// Fixture oracle used in tests that do not exercise membership narrowing.
///
/// Reports every account as a non-member.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOrgMembershipQuery;

#[async_trait]
impl OrgMembershipQuery for FixtureOrgMembershipQuery {
    async fn members_among(
        &self,
        _organization: &OrgId,
        _account_ids: &[AccountId],
    ) -> Result<HashSet<AccountId>, OrgMembershipError> {
        Ok(HashSet::new())
    }
}
