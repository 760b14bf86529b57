//! Constructor macro shared by the error sub-modules
//!
//! Each sub-module lists its variants once and gets a short, snake_case
//! constructor per variant, so call sites read `query::failed(id, msg)`
//! instead of spelling out the struct variant.
//!
//! # Example
//! ```rust,ignore
//! impl_error_constructors! {
//!     QueryFailed as failed(package, message),
//! }
//!
//! let err = failed("04t000000000001", "INVALID_TYPE");
//! ```

macro_rules! impl_error_constructors {
    ($($variant:ident as $fn_name:ident($($field:ident),* $(,)?)),* $(,)?) => {
        $(
            #[doc = concat!("Creates a [`", stringify!($variant), "`](crate::error::DepInstallError::", stringify!($variant), ") error")]
            pub fn $fn_name($($field: impl Into<String>),*) -> $crate::error::DepInstallError {
                $crate::error::DepInstallError::$variant {
                    $($field: $field.into()),*
                }
            }
        )*
    };
}

pub(crate) use impl_error_constructors;
