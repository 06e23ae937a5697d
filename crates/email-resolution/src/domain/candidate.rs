//! Candidate accounts considered during one resolution.

use serde::{Deserialize, Serialize};

use crate::domain::AccountId;

/// One account currently associated with the address under resolution.
///
/// Identity is the account identifier; the flags describe the association
/// between that account and the address. Candidates are immutable for the
/// duration of a resolution and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    account_id: AccountId,
    verified: bool,
    primary: bool,
}

impl Candidate {
    /// Build a candidate from its account identifier and association flags.
    pub const fn new(account_id: AccountId, verified: bool, primary: bool) -> Self {
        Self {
            account_id,
            verified,
            primary,
        }
    }

    /// Identifier of the account that owns this email association.
    pub const fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// Whether the account has completed verification of this address.
    pub const fn is_verified(&self) -> bool {
        self.verified
    }

    /// Whether this address is the account's designated primary address.
    pub const fn is_primary(&self) -> bool {
        self.primary
    }
}

/// Unordered collection of candidates, unique by account identifier.
///
/// ## Invariants
/// - At most one candidate per account identifier; inserting a duplicate is
///   ignored.
/// - Filtering returns a fresh set and never adds or reorders members.
///
/// # Examples
/// ```
/// use email_resolution::domain::{AccountId, Candidate, CandidateSet};
///
/// let id = AccountId::random();
/// let mut set = CandidateSet::new();
/// assert!(set.insert(Candidate::new(id, true, false)));
/// assert!(!set.insert(Candidate::new(id, false, false)));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Candidate>", into = "Vec<Candidate>")]
pub struct CandidateSet {
    members: Vec<Candidate>,
}

impl CandidateSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Add a candidate, ignoring it if the account is already present.
    ///
    /// Returns `true` when the candidate was added.
    pub fn insert(&mut self, candidate: Candidate) -> bool {
        if self.contains(candidate.account_id()) {
            return false;
        }
        self.members.push(candidate);
        true
    }

    /// Whether a candidate with this account identifier is present.
    pub fn contains(&self, account_id: &AccountId) -> bool {
        self.members
            .iter()
            .any(|candidate| candidate.account_id() == account_id)
    }

    /// Number of candidates in the set.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The sole member, when the set holds exactly one candidate.
    pub fn sole(&self) -> Option<&Candidate> {
        if self.members.len() == 1 {
            self.members.first()
        } else {
            None
        }
    }

    /// Iterate over the members.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.members.iter()
    }

    /// Account identifiers of every member, for batched lookups.
    pub fn account_ids(&self) -> Vec<AccountId> {
        self.members
            .iter()
            .map(|candidate| *candidate.account_id())
            .collect()
    }

    /// New set holding the members that satisfy the predicate.
    pub fn filtered(&self, predicate: impl Fn(&Candidate) -> bool) -> Self {
        Self {
            members: self
                .members
                .iter()
                .filter(|candidate| predicate(candidate))
                .cloned()
                .collect(),
        }
    }
}

impl From<Vec<Candidate>> for CandidateSet {
    fn from(candidates: Vec<Candidate>) -> Self {
        candidates.into_iter().collect()
    }
}

impl From<CandidateSet> for Vec<Candidate> {
    fn from(set: CandidateSet) -> Self {
        set.members
    }
}

impl FromIterator<Candidate> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        let mut set = Self::new();
        for candidate in iter {
            set.insert(candidate);
        }
        set
    }
}

impl IntoIterator for CandidateSet {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}
