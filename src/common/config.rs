//! Configuration constants for RosterDB.

/// Number of grade slots carried by every student record.
///
/// Grades are a fixed-size vector rather than a growable list:
/// - Every record has the same shape and size
/// - The registry never reasons about partially-filled terms
pub const GRADE_COUNT: usize = 10;

/// Maximum accepted student name length, in bytes.
///
/// Names longer than this are rejected at record construction with
/// [`Error::NameTooLong`](crate::common::Error::NameTooLong) rather than
/// silently truncated.
pub const MAX_NAME_LEN: usize = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_count() {
        assert_eq!(GRADE_COUNT, 10);
    }

    #[test]
    fn test_max_name_len_positive() {
        assert!(MAX_NAME_LEN > 0);
        assert_eq!(MAX_NAME_LEN, 100);
    }
}
