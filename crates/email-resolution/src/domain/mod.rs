//! Domain types and decision logic for email-to-account resolution.
//!
//! Purpose: strongly typed vocabulary (addresses, identifiers, candidates)
//! plus the narrowing pipeline that disambiguates an address shared by
//! several active accounts. Types are immutable per resolution; invariants
//! and serde contracts live in each type's Rustdoc.

pub mod candidate;
pub mod email;
pub mod identity;
pub mod ports;
pub mod resolution;
pub mod resolution_service;

pub use self::candidate::{Candidate, CandidateSet};
pub use self::email::{EmailAddress, EmailValidationError};
pub use self::identity::{AccountId, IdentityValidationError, OrgId};
pub use self::resolution::{
    ResolutionContext, ResolutionError, ResolutionOutcome, ResolutionStep,
};
pub use self::resolution_service::EmailResolutionService;
