//! Deterministic email-to-account disambiguation.
//!
//! When an inbound identity claim (an email address) matches more than one
//! active account, this crate picks exactly one "best" account or refuses
//! with an enumerable outcome. The core is a fixed, ordered chain of
//! narrowing heuristics — verification status, organization membership,
//! primary-address status — with short-circuit and no-op semantics that
//! guarantee monotonic progress toward some answer.
//!
//! Storage, membership computation, and metrics transport are consumed
//! through narrow ports ([`domain::ports`]); adapters live in [`outbound`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use email_resolution::domain::ports::NoOpResolutionMetrics;
//! use email_resolution::domain::{AccountId, EmailAddress, ResolutionOutcome};
//! use email_resolution::outbound::InMemoryDirectory;
//! use email_resolution::EmailResolutionService;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let directory = Arc::new(InMemoryDirectory::new());
//! let email = EmailAddress::new("ada@example.org").unwrap();
//! let ada = AccountId::random();
//! let imposter = AccountId::random();
//! directory.add_account(ada, true);
//! directory.add_account(imposter, true);
//! directory.add_email(&ada, &email, true, true);
//! directory.add_email(&imposter, &email, false, false);
//!
//! let service = EmailResolutionService::new(
//!     directory.clone(),
//!     directory,
//!     Arc::new(NoOpResolutionMetrics),
//! );
//! let outcome = service.resolve_email_to_account(&email, None).await.unwrap();
//! match outcome {
//!     ResolutionOutcome::Unique(winner) => assert_eq!(*winner.account_id(), ada),
//!     other => panic!("expected a unique winner, got {other:?}"),
//! }
//! # }
//! ```

pub mod domain;
pub mod outbound;

pub use domain::EmailResolutionService;
pub use domain::{ResolutionError, ResolutionOutcome};
