//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and a concrete
//! backend; they contain no narrowing logic.
//!
//! - **directory**: shared in-memory account/email directory backing the
//!   candidate source and membership ports.
//! - **metrics**: Prometheus-backed outcome counters (feature-gated).

pub mod directory;
#[cfg(feature = "metrics")]
pub mod metrics;

pub use directory::InMemoryDirectory;
