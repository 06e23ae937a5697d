//! Resolution pipeline vocabulary: context, steps, outcomes, and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ports::{CandidateSourceError, OrgMembershipError};
use crate::domain::{Candidate, CandidateSet, EmailAddress, OrgId};

/// Immutable inputs for one resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionContext {
    email: EmailAddress,
    organization: Option<OrgId>,
}

impl ResolutionContext {
    /// Build a context from the address under resolution and an optional
    /// organization to scope membership narrowing.
    pub const fn new(email: EmailAddress, organization: Option<OrgId>) -> Self {
        Self {
            email,
            organization,
        }
    }

    /// The address being resolved.
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Organization scope, when the caller supplied one.
    pub const fn organization(&self) -> Option<&OrgId> {
        self.organization.as_ref()
    }
}

/// Narrowing rules in their fixed priority order.
///
/// Earlier steps are stronger signals: a verified association outranks
/// organization membership, which outranks the primary-address flag. Partial
/// narrowing by an earlier step is retained for later ones; a step whose
/// filter would eliminate every remaining candidate is skipped outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStep {
    /// Keep candidates whose address is verified.
    Verified,
    /// Keep candidates whose account belongs to the context organization.
    OrgMembership,
    /// Keep candidates for whom this address is the account's primary one.
    PrimaryAddress,
}

impl ResolutionStep {
    /// The steps in the order the pipeline applies them.
    pub const ORDERED: [Self; 3] = [Self::Verified, Self::OrgMembership, Self::PrimaryAddress];

    /// Stable name used in log events.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::OrgMembership => "org_membership",
            Self::PrimaryAddress => "primary_address",
        }
    }
}

/// Result of one resolution call.
///
/// All three variants are expected, common-path values: the caller must
/// branch on them rather than treat any of them as a failure. In particular
/// [`ResolutionOutcome::NoMatch`] (no account holds this address) and
/// [`ResolutionOutcome::Ambiguous`] (several accounts remain and none can be
/// preferred) carry different information and are never collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Exactly one account matched or survived narrowing.
    Unique(Candidate),
    /// No active account is associated with the address.
    NoMatch,
    /// Two or more candidates remained after every step; carries the
    /// narrowed set so the caller can log, alert, or present choices.
    Ambiguous(CandidateSet),
}

impl ResolutionOutcome {
    /// The winning candidate, when resolution was conclusive.
    pub const fn unique(&self) -> Option<&Candidate> {
        match self {
            Self::Unique(candidate) => Some(candidate),
            Self::NoMatch | Self::Ambiguous(_) => None,
        }
    }
}

/// Failures that abort a resolution before it can produce an outcome.
///
/// Expected ambiguity is not an error (see [`ResolutionOutcome`]); only a
/// failing external dependency interrupts the pipeline. A membership lookup
/// failure in particular must never be read as "zero members", since that
/// would silently widen the apparent ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The candidate source could not produce the candidate set.
    #[error("candidate lookup failed: {source}")]
    CandidateSource {
        /// Underlying port error.
        #[from]
        source: CandidateSourceError,
    },
    /// The organization membership lookup failed mid-pipeline.
    #[error("organization membership lookup failed: {source}")]
    Membership {
        /// Underlying port error.
        #[from]
        source: OrgMembershipError,
    },
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::AccountId;

    #[test]
    fn ordered_steps_run_strongest_signal_first() {
        assert_eq!(
            ResolutionStep::ORDERED,
            [
                ResolutionStep::Verified,
                ResolutionStep::OrgMembership,
                ResolutionStep::PrimaryAddress,
            ],
        );
    }

    #[test]
    fn unique_accessor_exposes_winner_only() {
        let winner = Candidate::new(AccountId::random(), true, false);
        assert_eq!(
            ResolutionOutcome::Unique(winner.clone()).unique(),
            Some(&winner),
        );
        assert!(ResolutionOutcome::NoMatch.unique().is_none());
        assert!(
            ResolutionOutcome::Ambiguous(CandidateSet::new())
                .unique()
                .is_none()
        );
    }

    #[test]
    fn membership_error_keeps_its_source_message() {
        let error = ResolutionError::from(OrgMembershipError::lookup("deadline exceeded"));
        assert!(error.to_string().contains("deadline exceeded"));
    }
}
