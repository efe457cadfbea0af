//! Exit codes for the keyspace CLI.
//! Scripts branch on these, so they are part of the public contract.

use keyspace_core::NamespaceError;

pub const SUCCESS: i32 = 0;
pub const NOT_FOUND: i32 = 1; // extract found no instance name
pub const INVALID_ARGUMENT: i32 = 2; // empty or malformed identifier, bad flag combination
pub const INVALID_PATH: i32 = 3; // path does not match the naming scheme

/// Exit code for a failed command.
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<NamespaceError>() {
        Some(NamespaceError::InvalidPath { .. }) => INVALID_PATH,
        Some(NamespaceError::InvalidArgument { .. }) | None => INVALID_ARGUMENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_for_error_sees_through_context() {
        let err = Err::<(), _>(NamespaceError::InvalidPath {
            path: "/x".into(),
            reason: "short".into(),
        })
        .context("parsing")
        .unwrap_err();
        assert_eq!(for_error(&err), INVALID_PATH);
    }

    #[test]
    fn test_for_error_other() {
        assert_eq!(for_error(&anyhow::anyhow!("bad flags")), INVALID_ARGUMENT);
    }
}
