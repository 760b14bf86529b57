//! Dependency query errors

use super::impl_error_constructors;

impl_error_constructors! {
    QueryFailed as failed(package, message),
    MalformedQueryResponse as malformed(package, reason),
}
