//! In-memory record store for student records
//!
//! The store owns a single ordered `Vec` with no secondary indices. It
//! remembers which key it was last sorted by so that repeated sorted searches
//! on the same field skip the sort.

pub mod algorithms;
pub mod key;

pub use key::SortKey;

use crate::core::error::{PortalError, Result};
use crate::core::models::StudentRecord;
use crate::debug;

/// Ordered, mutable collection of student records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
    sorted_by: Option<SortKey>,
}

impl RecordStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            sorted_by: None,
        }
    }

    /// Build a store from already-loaded records, keeping their order
    #[must_use]
    pub const fn from_records(records: Vec<StudentRecord>) -> Self {
        Self {
            records,
            sorted_by: None,
        }
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in their current order
    #[must_use]
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Iterate over records in their current order
    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    /// Key the records are currently ordered by, if any
    #[must_use]
    pub const fn sorted_by(&self) -> Option<SortKey> {
        self.sorted_by
    }

    /// First record with the given id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Whether any record has the given id
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Append a record
    ///
    /// Duplicate ids are not rejected here; use [`insert_unique`](Self::insert_unique)
    /// for that.
    pub fn insert(&mut self, record: StudentRecord) {
        debug!("Inserting student {}", record.id());
        self.records.push(record);
        self.sorted_by = None;
    }

    /// Append a record unless its id is already taken
    ///
    /// # Errors
    /// Returns `PortalError::DuplicateId` if a record with the same id exists;
    /// the store is left unchanged.
    pub fn insert_unique(&mut self, record: StudentRecord) -> Result<()> {
        if self.contains(record.id()) {
            return Err(PortalError::DuplicateId(record.id().to_string()));
        }
        self.insert(record);
        Ok(())
    }

    /// Remove every record with the given id
    ///
    /// Remaining records keep their relative order, so any current sort
    /// order survives.
    ///
    /// # Returns
    /// Number of records removed; `0` means no record matched
    pub fn delete(&mut self, id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        let removed = before - self.records.len();
        debug!("Deleted {removed} record(s) with id {id}");
        removed
    }

    /// Sort all records ascending by `key` and return them
    ///
    /// Uses a stable merge sort: records with equal values keep the order
    /// they had before the call.
    pub fn sort_by(&mut self, key: SortKey) -> &[StudentRecord] {
        if self.sorted_by != Some(key) {
            let records = std::mem::take(&mut self.records);
            self.records = algorithms::merge_sort_by(
                records,
                &|a: &StudentRecord, b: &StudentRecord| key.value(a).cmp(key.value(b)),
            );
            self.sorted_by = Some(key);
            debug!("Sorted {} record(s) by {key}", self.records.len());
        }
        &self.records
    }

    /// All records whose `key` field equals `value`
    ///
    /// Linear scan in current order; does not sort.
    #[must_use]
    pub fn search_exact(&self, key: SortKey, value: &str) -> Vec<&StudentRecord> {
        self.records
            .iter()
            .filter(|r| key.value(r) == value)
            .collect()
    }

    /// Binary search for a record whose `key` field equals `value`
    ///
    /// Sorts by `key` first unless already sorted by it. Returns at most one
    /// record: when several match, which one is found depends on where the
    /// search bounds land. Use [`search_exact`](Self::search_exact) to get
    /// every match.
    pub fn search_sorted(&mut self, key: SortKey, value: &str) -> Option<&StudentRecord> {
        let records = self.sort_by(key);
        algorithms::binary_search_by(records, |r| key.value(r).cmp(value))
    }

    /// Enroll a stored student in a course
    ///
    /// Enrollment does not touch any sortable field, so the sort order is kept.
    ///
    /// # Returns
    /// `true` if newly enrolled, `false` if already enrolled
    ///
    /// # Errors
    /// Returns `PortalError::UnknownStudent` if no record has `id`.
    pub fn enroll(&mut self, id: &str, course_code: &str) -> Result<bool> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| PortalError::UnknownStudent(id.to_string()))?;
        Ok(record.add_course(course_code.to_string()))
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
