use crate::{
    routes::students::{
        get_students_page, internal_get_student_table, internal_post_add_student,
        internal_post_select_school,
    },
    state::RollcallState,
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub mod students;

pub fn router(state: RollcallState) -> Router {
    let trace_layer = TraceLayer::new_for_http();

    Router::new()
        .route("/", get(get_students_page))
        .route("/internal/students/table", get(internal_get_student_table))
        .route(
            "/internal/students/select_school",
            post(internal_post_select_school),
        )
        .route("/internal/students/add", post(internal_post_add_student))
        .layer(CompressionLayer::new())
        .layer(trace_layer)
        .with_state(state)
}
