use crate::state::RosterState;
use axum::{Router, routing::get};

pub mod students;

pub fn router(state: RosterState) -> Router {
    Router::new()
        .route(
            "/api/students",
            get(students::get_all_students).post(students::post_new_student),
        )
        .route("/api/students/by-email", get(students::get_student_by_email))
        .route(
            "/api/students/{id}",
            get(students::get_student)
                .put(students::put_update_student)
                .delete(students::delete_student),
        )
        .with_state(state)
}
