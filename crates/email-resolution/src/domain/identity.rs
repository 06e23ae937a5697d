//! Identifier newtypes shared across the resolution domain.
//!
//! Both identifiers are UUID-backed. Equality and hashing go through the
//! parsed UUID so that two renderings of the same identifier (for example
//! uppercase hex from an upstream system) compare equal.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by the identifier constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityValidationError {
    /// The identifier string was empty.
    EmptyId,
    /// The identifier string was not a valid UUID.
    InvalidId,
}

impl fmt::Display for IdentityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "identifier must not be empty"),
            Self::InvalidId => write!(f, "identifier must be a valid UUID"),
        }
    }
}

impl std::error::Error for IdentityValidationError {}

macro_rules! uuid_id {
    ($(#[$outer:meta])* $name:ident) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(Uuid);

        impl $name {
            /// Validate and construct an identifier from borrowed input.
            pub fn new(id: impl AsRef<str>) -> Result<Self, IdentityValidationError> {
                let raw = id.as_ref();
                if raw.is_empty() {
                    return Err(IdentityValidationError::EmptyId);
                }
                if raw.trim() != raw {
                    return Err(IdentityValidationError::InvalidId);
                }
                let parsed =
                    Uuid::parse_str(raw).map_err(|_| IdentityValidationError::InvalidId)?;
                Ok(Self(parsed))
            }

            /// Generate a new random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the underlying UUID.
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentityValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

uuid_id! {
    /// Stable identifier of an account that may own email addresses.
    AccountId
}

uuid_id! {
    /// Stable identifier of an organization used to scope resolution.
    OrgId
}
