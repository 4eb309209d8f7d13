use crate::{
    data::StudentRepo,
    error::{MakeQuerySnafu, RosterResult},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use sqlx::{FromRow, Pool, Postgres};

#[derive(Serialize, Deserialize, FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Request-body shape for creating or updating a student. A client-supplied
/// `id` field is ignored on deserialization; ids are storage-assigned.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug)]
pub struct PgStudentRepo {
    pool: Pool<Postgres>,
}

impl PgStudentRepo {
    pub const fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepo for PgStudentRepo {
    async fn create(&self, draft: StudentDraft) -> RosterResult<Student> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO public.students (name, email) VALUES ($1, $2) RETURNING id, name, email",
        )
        .bind(draft.name)
        .bind(draft.email)
        .fetch_one(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn find_all(&self) -> RosterResult<Vec<Student>> {
        sqlx::query_as::<_, Student>("SELECT id, name, email FROM public.students ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context(MakeQuerySnafu)
    }

    async fn find_by_id(&self, id: i64) -> RosterResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT id, name, email FROM public.students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context(MakeQuerySnafu)
    }

    async fn update(&self, id: i64, draft: StudentDraft) -> RosterResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "UPDATE public.students SET name = $2, email = $3 WHERE id = $1 RETURNING id, name, email",
        )
        .bind(id)
        .bind(draft.name)
        .bind(draft.email)
        .fetch_optional(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn delete(&self, id: i64) -> RosterResult<bool> {
        let result = sqlx::query("DELETE FROM public.students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(MakeQuerySnafu)?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_email(&self, email: &str) -> RosterResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT id, name, email FROM public.students WHERE email = $1 ORDER BY id LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }
}
