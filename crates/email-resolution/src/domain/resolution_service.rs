//! Email-to-account resolution service.
//!
//! This module implements the disambiguation engine: given the candidate
//! accounts behind an email address, an ordered chain of narrowing steps
//! picks exactly one account or reports structured ambiguity. Steps run in
//! fixed priority order (verification, organization membership, primary
//! address); a step that would eliminate every remaining candidate is
//! skipped, and partial narrowing is retained for later steps.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::{
    CandidateSource, OrgMembershipQuery, ResolutionCounter, ResolutionMetrics,
};
use crate::domain::{
    Candidate, CandidateSet, EmailAddress, OrgId, ResolutionContext, ResolutionError,
    ResolutionOutcome, ResolutionStep,
};

/// Resolution service composing the candidate source, the membership
/// oracle, and the metrics sink.
///
/// The service is stateless across calls: each resolution operates on its
/// own candidate set and context, so concurrent resolutions need no
/// coordination.
#[derive(Clone)]
pub struct EmailResolutionService<S, O, M> {
    source: Arc<S>,
    memberships: Arc<O>,
    metrics: Arc<M>,
}

impl<S, O, M> EmailResolutionService<S, O, M> {
    /// Create a new service from its three collaborators.
    pub const fn new(source: Arc<S>, memberships: Arc<O>, metrics: Arc<M>) -> Self {
        Self {
            source,
            memberships,
            metrics,
        }
    }
}

impl<S, O, M> EmailResolutionService<S, O, M>
where
    S: CandidateSource,
    O: OrgMembershipQuery,
    M: ResolutionMetrics,
{
    /// Resolve an email address to at most one account.
    ///
    /// Fetches the active candidates for `email` from the candidate source
    /// and runs the narrowing pipeline over them. This is the public entry
    /// point for callers that do not already hold a candidate set.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] when the candidate source or the
    /// membership oracle fails. Expected empty and ambiguous results are
    /// [`ResolutionOutcome`] values, not errors.
    pub async fn resolve_email_to_account(
        &self,
        email: &EmailAddress,
        organization: Option<OrgId>,
    ) -> Result<ResolutionOutcome, ResolutionError> {
        let candidates = self.source.find_active_by_email(email).await?;
        let context = ResolutionContext::new(email.clone(), organization);
        self.resolve(&context, candidates).await
    }

    /// Run the narrowing pipeline over an already-fetched candidate set.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::Membership`] when the membership oracle
    /// fails mid-pipeline; no later step runs and no partial answer is
    /// guessed.
    pub async fn resolve(
        &self,
        context: &ResolutionContext,
        candidates: CandidateSet,
    ) -> Result<ResolutionOutcome, ResolutionError> {
        if candidates.is_empty() {
            return Ok(ResolutionOutcome::NoMatch);
        }
        if let Some(sole) = candidates.sole() {
            // A single candidate needs no narrowing and fires no metric.
            return Ok(ResolutionOutcome::Unique(sole.clone()));
        }

        let mut current = candidates;
        for step in ResolutionStep::ORDERED {
            let next = self.narrow(step, context, &current).await?;

            if let Some(winner) = next.sole() {
                let winner = winner.clone();
                debug!(
                    step = step.name(),
                    email = %context.email(),
                    account_id = %winner.account_id(),
                    candidates_before = current.len(),
                    "resolution narrowed to a single candidate",
                );
                self.record(conclusive_counter(step)).await;
                return Ok(ResolutionOutcome::Unique(winner));
            }

            if next.is_empty() {
                // Eliminating every candidate is never informative: the
                // criterion does not apply to this set, so the step is a
                // no-op for this resolution.
                debug!(
                    step = step.name(),
                    email = %context.email(),
                    "step would eliminate all candidates; skipped",
                );
                continue;
            }

            current = next;
        }

        warn!(
            email = %context.email(),
            remaining = ?current.account_ids(),
            "resolution inconclusive after all steps",
        );
        self.record(ResolutionCounter::NoResolution).await;
        Ok(ResolutionOutcome::Ambiguous(current))
    }

    /// Apply one step's narrowing predicate to the current set.
    async fn narrow(
        &self,
        step: ResolutionStep,
        context: &ResolutionContext,
        current: &CandidateSet,
    ) -> Result<CandidateSet, ResolutionError> {
        match step {
            ResolutionStep::Verified => Ok(current.filtered(Candidate::is_verified)),
            ResolutionStep::PrimaryAddress => Ok(current.filtered(Candidate::is_primary)),
            ResolutionStep::OrgMembership => {
                let Some(organization) = context.organization() else {
                    // Without an organization scope the predicate yields the
                    // empty set, which the pipeline discards as a no-op.
                    return Ok(CandidateSet::new());
                };
                let account_ids = current.account_ids();
                let members = self
                    .memberships
                    .members_among(organization, &account_ids)
                    .await?;
                Ok(current.filtered(|candidate| members.contains(candidate.account_id())))
            }
        }
    }

    /// Fire-and-forget counter increment; sink failures never affect the
    /// resolution outcome.
    async fn record(&self, counter: ResolutionCounter) {
        if let Err(error) = self.metrics.increment(counter).await {
            debug!(%error, counter = counter.as_str(), "metrics sink rejected increment");
        }
    }
}

/// Counter fired when a step settles the resolution on its own.
const fn conclusive_counter(step: ResolutionStep) -> ResolutionCounter {
    match step {
        ResolutionStep::Verified => ResolutionCounter::ByVerification,
        ResolutionStep::OrgMembership => ResolutionCounter::ByOrgMembership,
        ResolutionStep::PrimaryAddress => ResolutionCounter::ByPrimaryEmail,
    }
}
