use crate::{
    data::student::{Student, StudentDraft},
    error::{MissingStudentByEmailSnafu, MissingStudentSnafu, RosterResult},
    state::RosterState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use snafu::OptionExt;

pub async fn post_new_student(
    State(state): State<RosterState>,
    Json(draft): Json<StudentDraft>,
) -> RosterResult<Json<Student>> {
    let student = state.repo().create(draft).await?;
    info!(id = student.id, "Created student");
    Ok(Json(student))
}

pub async fn get_all_students(
    State(state): State<RosterState>,
) -> RosterResult<Json<Vec<Student>>> {
    Ok(Json(state.repo().find_all().await?))
}

pub async fn get_student(
    State(state): State<RosterState>,
    Path(id): Path<i64>,
) -> RosterResult<Json<Student>> {
    let student = state
        .repo()
        .find_by_id(id)
        .await?
        .context(MissingStudentSnafu { id })?;
    Ok(Json(student))
}

pub async fn put_update_student(
    State(state): State<RosterState>,
    Path(id): Path<i64>,
    Json(draft): Json<StudentDraft>,
) -> RosterResult<Json<Student>> {
    let student = state
        .repo()
        .update(id, draft)
        .await?
        .context(MissingStudentSnafu { id })?;
    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<RosterState>,
    Path(id): Path<i64>,
) -> RosterResult<()> {
    if state.repo().delete(id).await? {
        info!(id, "Deleted student");
        Ok(())
    } else {
        MissingStudentSnafu { id }.fail()
    }
}

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn get_student_by_email(
    State(state): State<RosterState>,
    Query(EmailQuery { email }): Query<EmailQuery>,
) -> RosterResult<Json<Student>> {
    let student = state
        .repo()
        .find_by_email(&email)
        .await?
        .context(MissingStudentByEmailSnafu { email })?;
    Ok(Json(student))
}
