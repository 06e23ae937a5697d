//! In-memory account directory implementing the lookup ports.
//!
//! Backs tests and wiring environments without a real store. The directory
//! owns the candidate source contract: lookups are case-insensitive (the
//! [`EmailAddress`] type normalises on construction) and inactive accounts
//! are never returned as candidates.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    CandidateSource, CandidateSourceError, OrgMembershipError, OrgMembershipQuery,
};
use crate::domain::{AccountId, Candidate, CandidateSet, EmailAddress, OrgId};

/// One email-to-account association held by the directory.
#[derive(Debug, Clone)]
struct EmailRecord {
    email: EmailAddress,
    account_id: AccountId,
    verified: bool,
    primary: bool,
}

#[derive(Debug, Default)]
struct DirectoryState {
    emails: Vec<EmailRecord>,
    active: HashSet<AccountId>,
    org_members: HashMap<OrgId, HashSet<AccountId>>,
}

/// Shared in-memory directory of accounts, email associations, and
/// organization memberships.
///
/// Mutation methods take `&self`; the directory is safe to share behind an
/// `Arc` across concurrent resolutions.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    state: RwLock<DirectoryState>,
}

impl InMemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, DirectoryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DirectoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an account and whether it is active.
    ///
    /// Re-registering an account overwrites its active flag.
    pub fn add_account(&self, account_id: AccountId, active: bool) {
        let mut state = self.write();
        if active {
            state.active.insert(account_id);
        } else {
            state.active.remove(&account_id);
        }
    }

    /// Mark a previously registered account as inactive.
    pub fn deactivate(&self, account_id: &AccountId) {
        self.write().active.remove(account_id);
    }

    /// Associate an email address with an account.
    pub fn add_email(
        &self,
        account_id: &AccountId,
        email: &EmailAddress,
        verified: bool,
        primary: bool,
    ) {
        self.write().emails.push(EmailRecord {
            email: email.clone(),
            account_id: *account_id,
            verified,
            primary,
        });
    }

    /// Record an account as a member of an organization.
    pub fn add_org_member(&self, organization: &OrgId, account_id: &AccountId) {
        self.write()
            .org_members
            .entry(*organization)
            .or_default()
            .insert(*account_id);
    }
}

#[async_trait]
impl CandidateSource for InMemoryDirectory {
    async fn find_active_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<CandidateSet, CandidateSourceError> {
        let state = self.read();
        Ok(state
            .emails
            .iter()
            .filter(|record| record.email == *email && state.active.contains(&record.account_id))
            .map(|record| Candidate::new(record.account_id, record.verified, record.primary))
            .collect())
    }
}

#[async_trait]
impl OrgMembershipQuery for InMemoryDirectory {
    async fn members_among(
        &self,
        organization: &OrgId,
        account_ids: &[AccountId],
    ) -> Result<HashSet<AccountId>, OrgMembershipError> {
        if account_ids.is_empty() {
            return Ok(HashSet::new());
        }
        let state = self.read();
        let members = state.org_members.get(organization);
        Ok(account_ids
            .iter()
            .filter(|id| members.is_some_and(|set| set.contains(*id)))
            .copied()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    fn email(raw: &str) -> EmailAddress {
        EmailAddress::new(raw).expect("valid address")
    }

    #[tokio::test]
    async fn lookup_matches_case_insensitively() {
        let directory = InMemoryDirectory::new();
        let account = AccountId::random();
        directory.add_account(account, true);
        directory.add_email(&account, &email("Ada@Example.org"), true, true);

        let candidates = directory
            .find_active_by_email(&email("ADA@example.ORG"))
            .await
            .expect("lookup succeeds");
        assert_eq!(candidates.len(), 1);
        assert!(candidates.contains(&account));
    }

    #[tokio::test]
    async fn lookup_excludes_inactive_accounts() {
        let directory = InMemoryDirectory::new();
        let active = AccountId::random();
        let dormant = AccountId::random();
        let shared = email("shared@example.org");
        directory.add_account(active, true);
        directory.add_account(dormant, true);
        directory.add_email(&active, &shared, false, false);
        directory.add_email(&dormant, &shared, true, true);
        directory.deactivate(&dormant);

        let candidates = directory
            .find_active_by_email(&shared)
            .await
            .expect("lookup succeeds");
        assert_eq!(candidates.len(), 1);
        assert!(candidates.contains(&active));
    }

    #[tokio::test]
    async fn lookup_for_unknown_address_is_empty() {
        let directory = InMemoryDirectory::new();
        let candidates = directory
            .find_active_by_email(&email("nobody@example.org"))
            .await
            .expect("lookup succeeds");
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn membership_query_returns_the_member_subset() {
        let directory = InMemoryDirectory::new();
        let organization = OrgId::random();
        let member = AccountId::random();
        let outsider = AccountId::random();
        directory.add_org_member(&organization, &member);

        let members = directory
            .members_among(&organization, &[member, outsider])
            .await
            .expect("lookup succeeds");
        assert_eq!(members, HashSet::from([member]));
    }

    #[tokio::test]
    async fn membership_query_tolerates_empty_input() {
        let directory = InMemoryDirectory::new();
        let organization = OrgId::random();
        directory.add_org_member(&organization, &AccountId::random());

        let members = directory
            .members_among(&organization, &[])
            .await
            .expect("lookup succeeds");
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn membership_query_for_unknown_org_is_empty() {
        let directory = InMemoryDirectory::new();
        let members = directory
            .members_among(&OrgId::random(), &[AccountId::random()])
            .await
            .expect("lookup succeeds");
        assert!(members.is_empty());
    }
}
