use crate::{
    data::{
        StudentRepo,
        student::{Student, StudentDraft},
    },
    error::RosterResult,
};
use async_trait::async_trait;
use std::{collections::BTreeMap, sync::Mutex};

/// In-memory [`StudentRepo`] with the same identity-generation behavior as
/// the postgres adapter, for driving the router in tests without a database.
#[derive(Default)]
pub struct MemoryStudentRepo {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Student>,
}

#[async_trait]
impl StudentRepo for MemoryStudentRepo {
    async fn create(&self, draft: StudentDraft) -> RosterResult<Student> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let student = Student {
            id: inner.next_id,
            name: draft.name,
            email: draft.email,
        };
        inner.rows.insert(student.id, student.clone());
        Ok(student)
    }

    async fn find_all(&self) -> RosterResult<Vec<Student>> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RosterResult<Option<Student>> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, draft: StudentDraft) -> RosterResult<Option<Student>> {
        Ok(self.inner.lock().unwrap().rows.get_mut(&id).map(|student| {
            student.name = draft.name;
            student.email = draft.email;
            student.clone()
        }))
    }

    async fn delete(&self, id: i64) -> RosterResult<bool> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).is_some())
    }

    async fn find_by_email(&self, email: &str) -> RosterResult<Option<Student>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .values()
            .find(|student| student.email == email)
            .cloned())
    }
}
