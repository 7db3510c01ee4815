pub mod health;
pub mod metrics;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET    /students                     list students
/// POST   /students                     create student
/// PUT    /students/{id}                replace name/roll_no
/// DELETE /students/{id}                delete (cascades to attendance)
///
/// POST   /students/{id}/attendance     mark attendance (upsert)
/// GET    /students/{id}/attendance     history, ?start=&end=
///
/// GET    /attendance                   class roster, ?date=
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students",
            get(handlers::students::list_students).post(handlers::students::create_student),
        )
        .route(
            "/students/{id}",
            axum::routing::put(handlers::students::update_student)
                .delete(handlers::students::delete_student),
        )
        .route(
            "/students/{id}/attendance",
            get(handlers::attendance::attendance_history)
                .post(handlers::attendance::mark_attendance),
        )
        .route("/attendance", get(handlers::attendance::class_attendance))
}
