//! Errors starting external commands

use super::impl_error_constructors;

impl_error_constructors! {
    CommandSpawnFailed as spawn_failed(program, reason),
}
