//! Helper macro for declaring port error enums.
//!
//! Each variant carries named fields and a display template. The macro derives
//! `thiserror::Error` and emits one snake_case constructor per variant whose
//! parameters accept anything convertible into the field type.

macro_rules! define_port_error {
    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

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
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant { $($field : $ty),* });
            )*
        }
    };
}

pub(crate) use define_port_error;
