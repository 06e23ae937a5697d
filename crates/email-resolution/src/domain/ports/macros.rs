//! Helper macro for generating domain port error enums.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant {
                    $(
                        #[doc = concat!("`", stringify!($field), "` interpolated into the message.")]
                        $field: $ty
                    ),*
                },
            )*
        }

        ::paste::paste! {
            impl $name {
                $(
                    #[doc = concat!(
                        "Build [`", stringify!($name), "::", stringify!($variant),
                        "`], converting each field via `Into`.",
                    )]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum ExamplePortError {
            Unavailable { message: String } => "unavailable: {message}",
            RateLimited { retry_after_secs: u64 } => "rate limited for {retry_after_secs}s",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::unavailable("connection refused");
        assert_eq!(err.to_string(), "unavailable: connection refused");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExamplePortError::rate_limited(30_u64);
        assert_eq!(err.to_string(), "rate limited for 30s");
    }
}
