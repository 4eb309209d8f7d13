use crate::error::RosterResult;
use async_trait::async_trait;

pub mod student;

#[cfg(test)]
pub mod memory;

use student::{Student, StudentDraft};

/// Persistence operations over [`Student`], so handlers never issue storage
/// queries directly. Update and delete are atomic conditional statements
/// rather than find-then-act sequences.
#[async_trait]
pub trait StudentRepo: Send + Sync {
    /// Inserts a new row and returns it with the storage-assigned id.
    async fn create(&self, draft: StudentDraft) -> RosterResult<Student>;

    /// Every stored row, ordered by id.
    async fn find_all(&self) -> RosterResult<Vec<Student>>;

    async fn find_by_id(&self, id: i64) -> RosterResult<Option<Student>>;

    /// Overwrites name and email of the row with the given id in one
    /// statement, returning the updated row, or `None` if no row matched.
    async fn update(&self, id: i64, draft: StudentDraft) -> RosterResult<Option<Student>>;

    /// Removes the row with the given id; `false` if no row matched.
    async fn delete(&self, id: i64) -> RosterResult<bool>;

    /// First match by ascending id, since email carries no uniqueness
    /// constraint.
    async fn find_by_email(&self, email: &str) -> RosterResult<Option<Student>>;
}
