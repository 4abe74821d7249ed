//! Error types for RosterDB.

use thiserror::Error;

use crate::common::StudentId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in RosterDB.
///
/// Every variant is recoverable and leaves the registry unmodified.
/// Structural invariant breaches in the index are *not* represented here:
/// they are implementation bugs, caught by the test suite via
/// [`RbTree::is_valid`](crate::index::RbTree::is_valid), never runtime
/// conditions to report to a caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Lookup, update, or removal targeted an id that is not registered.
    #[error("{0} not found")]
    StudentNotFound(StudentId),

    /// An add targeted an id that is already registered.
    ///
    /// Use [`update`](crate::registry::StudentRegistry::update) to overwrite
    /// an existing record.
    #[error("{0} already registered")]
    DuplicateId(StudentId),

    /// A record was constructed with a name longer than the configured limit.
    #[error("name is {len} bytes, maximum is {max}")]
    NameTooLong { len: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::StudentNotFound(StudentId::new(42));
        assert_eq!(format!("{}", err), "Student(42) not found");

        let err = Error::DuplicateId(StudentId::new(7));
        assert_eq!(format!("{}", err), "Student(7) already registered");

        let err = Error::NameTooLong { len: 120, max: 100 };
        assert_eq!(format!("{}", err), "name is 120 bytes, maximum is 100");
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
