//! Student registry - the domain facade over the ordered index.
//!
//! # Components
//! - [`StudentRecord`] - Validated name + fixed-size grade vector
//! - [`StudentRegistry`] - Keyed store with explicit duplicate/absence policy
//!
//! The registry owns one [`RbTree`] keyed by [`StudentId`] and translates
//! index outcomes into crate errors. All user-facing text formatting and
//! input parsing belong to callers; the registry's boundary is this call
//! contract alone.

use crate::common::config::{GRADE_COUNT, MAX_NAME_LEN};
use crate::common::{Error, Result, StudentId};
use crate::index::{Iter, RbTree};

/// A student's payload: display name and per-term grades.
///
/// The record is opaque to the index — only the [`StudentId`] key
/// participates in ordering.
///
/// # Example
/// ```
/// use rosterdb::StudentRecord;
///
/// let record = StudentRecord::new("Ada Lovelace", [90.0; 10]).unwrap();
/// assert_eq!(record.name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    name: String,
    grades: [f32; GRADE_COUNT],
}

impl StudentRecord {
    /// Build a record, validating the name length.
    ///
    /// # Errors
    /// [`Error::NameTooLong`] if `name` exceeds
    /// [`MAX_NAME_LEN`](crate::common::config::MAX_NAME_LEN) bytes.
    pub fn new(name: impl Into<String>, grades: [f32; GRADE_COUNT]) -> Result<Self> {
        let name = name.into();
        if name.len() > MAX_NAME_LEN {
            return Err(Error::NameTooLong {
                len: name.len(),
                max: MAX_NAME_LEN,
            });
        }
        Ok(Self { name, grades })
    }

    /// The student's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The grade vector.
    pub fn grades(&self) -> &[f32; GRADE_COUNT] {
        &self.grades
    }
}

/// An in-memory student registry with O(log n) operations.
///
/// Wraps the red-black [`RbTree`] and pins down the duplicate-key policy
/// the index leaves open: [`add`](Self::add) rejects an existing id, while
/// [`update`](Self::update) requires one. Records come back in ascending
/// id order from [`iter`](Self::iter).
///
/// # Example
/// ```
/// use rosterdb::{StudentId, StudentRecord, StudentRegistry};
///
/// let mut registry = StudentRegistry::new();
/// let record = StudentRecord::new("Ada", [80.0; 10]).unwrap();
/// registry.add(StudentId::new(1), record).unwrap();
///
/// assert!(registry.find(StudentId::new(1)).is_some());
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StudentRegistry {
    index: RbTree<StudentId, StudentRecord>,
}

impl StudentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            index: RbTree::new(),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Register a new student.
    ///
    /// # Errors
    /// [`Error::DuplicateId`] if `id` is already registered; the existing
    /// record is untouched.
    pub fn add(&mut self, id: StudentId, record: StudentRecord) -> Result<()> {
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateId(id));
        }
        self.index.insert(id, record);
        Ok(())
    }

    /// Overwrite an existing student's record in place.
    ///
    /// The tree shape is untouched — only the payload changes.
    ///
    /// # Errors
    /// [`Error::StudentNotFound`] if `id` is not registered.
    pub fn update(&mut self, id: StudentId, record: StudentRecord) -> Result<()> {
        match self.index.get_mut(&id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(Error::StudentNotFound(id)),
        }
    }

    /// Remove a student, returning the record that was held.
    ///
    /// # Errors
    /// [`Error::StudentNotFound`] if `id` is not registered; nothing is
    /// mutated.
    pub fn remove(&mut self, id: StudentId) -> Result<StudentRecord> {
        self.index.remove(&id).ok_or(Error::StudentNotFound(id))
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.index.clear();
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Look up a student's record.
    pub fn find(&self, id: StudentId) -> Option<&StudentRecord> {
        self.index.get(&id)
    }

    /// All records in ascending id order.
    pub fn iter(&self) -> Iter<'_, StudentId, StudentRecord> {
        self.index.iter()
    }

    /// Number of registered students.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// `true` if no students are registered.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> StudentRecord {
        StudentRecord::new(name, [75.0; GRADE_COUNT]).unwrap()
    }

    #[test]
    fn test_add_and_find() {
        let mut registry = StudentRegistry::new();
        registry.add(StudentId::new(1), record("Ada")).unwrap();

        let found = registry.find(StudentId::new(1)).unwrap();
        assert_eq!(found.name(), "Ada");
        assert_eq!(registry.find(StudentId::new(2)), None);
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut registry = StudentRegistry::new();
        registry.add(StudentId::new(1), record("Ada")).unwrap();

        let err = registry.add(StudentId::new(1), record("Grace")).unwrap_err();
        assert_eq!(err, Error::DuplicateId(StudentId::new(1)));

        // The original record survives a rejected add.
        assert_eq!(registry.find(StudentId::new(1)).unwrap().name(), "Ada");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_existing() {
        let mut registry = StudentRegistry::new();
        registry.add(StudentId::new(1), record("Ada")).unwrap();

        registry.update(StudentId::new(1), record("Ada L.")).unwrap();
        assert_eq!(registry.find(StudentId::new(1)).unwrap().name(), "Ada L.");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_missing_rejected() {
        let mut registry = StudentRegistry::new();
        let err = registry.update(StudentId::new(9), record("Nobody")).unwrap_err();
        assert_eq!(err, Error::StudentNotFound(StudentId::new(9)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut registry = StudentRegistry::new();
        registry.add(StudentId::new(1), record("Ada")).unwrap();

        let removed = registry.remove(StudentId::new(1)).unwrap();
        assert_eq!(removed.name(), "Ada");
        assert!(registry.is_empty());

        let err = registry.remove(StudentId::new(1)).unwrap_err();
        assert_eq!(err, Error::StudentNotFound(StudentId::new(1)));
    }

    #[test]
    fn test_iter_ascending_by_id() {
        let mut registry = StudentRegistry::new();
        for (id, name) in [(30, "c"), (10, "a"), (20, "b")] {
            registry.add(StudentId::new(id), record(name)).unwrap();
        }

        let names: Vec<&str> = registry.iter().map(|(_, r)| r.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_record_name_too_long() {
        let long_name = "x".repeat(MAX_NAME_LEN + 1);
        let err = StudentRecord::new(long_name, [0.0; GRADE_COUNT]).unwrap_err();
        assert_eq!(
            err,
            Error::NameTooLong {
                len: MAX_NAME_LEN + 1,
                max: MAX_NAME_LEN
            }
        );
    }

    #[test]
    fn test_record_name_at_limit() {
        let name = "x".repeat(MAX_NAME_LEN);
        assert!(StudentRecord::new(name, [0.0; GRADE_COUNT]).is_ok());
    }

    #[test]
    fn test_clear() {
        let mut registry = StudentRegistry::new();
        for id in 0..5 {
            registry.add(StudentId::new(id), record("s")).unwrap();
        }

        registry.clear();
        assert!(registry.is_empty());

        registry.add(StudentId::new(1), record("again")).unwrap();
        assert_eq!(registry.len(), 1);
    }
}
