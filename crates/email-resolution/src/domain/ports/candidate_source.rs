//! Port for looking up the candidate accounts behind an email address.
//!
//! Adapters own the matching contract: the lookup is case-insensitive (the
//! [`EmailAddress`] type is already normalised to lowercase) and only active
//! accounts are eligible. The resolution core never queries a store
//! directly; it is handed the result of this port.

use async_trait::async_trait;

use crate::domain::{CandidateSet, EmailAddress};

use super::define_port_error;

define_port_error! {
    /// Errors raised by candidate source adapters.
    pub enum CandidateSourceError {
        /// The backing store could not be reached.
        Connection { message: String } =>
            "candidate source connection failed: {message}",
        /// The lookup failed during execution.
        Query { message: String } =>
            "candidate source query failed: {message}",
    }
}

/// Port returning the active accounts currently associated with an address.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Fetch the candidate set for an address.
    ///
    /// An address with no active associations yields an empty set, not an
    /// error.
    async fn find_active_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<CandidateSet, CandidateSourceError>;
}

/// Fixture source used in tests that do not exercise candidate lookup.
///
/// Always returns an empty candidate set.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCandidateSource;

#[async_trait]
impl CandidateSource for FixtureCandidateSource {
    async fn find_active_by_email(
        &self,
        _email: &EmailAddress,
    ) -> Result<CandidateSet, CandidateSourceError> {
        Ok(CandidateSet::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[tokio::test]
    async fn fixture_source_returns_empty_set() {
        let source = FixtureCandidateSource;
        let email = EmailAddress::new("ada@example.org").expect("valid address");

        let candidates = source
            .find_active_by_email(&email)
            .await
            .expect("fixture lookup should succeed");
        assert!(candidates.is_empty());
    }

    #[test]
    fn error_constructor_accepts_str() {
        let err = CandidateSourceError::query("relation missing");
        assert_eq!(
            err.to_string(),
            "candidate source query failed: relation missing"
        );
    }
}
