//! Axum router configuration for activity endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_activities, sign_up, unregister, ActivityAppState};

/// Create the activity API router.
///
/// # Routes
///
/// - `GET /activities` - List every activity
/// - `POST /activities/:activity_name/signup?email=` - Sign a student up
/// - `POST /activities/:activity_name/unregister?email=` - Remove a student
///
/// `:activity_name` arrives percent-decoded, so `Chess%20Club` matches the
/// `Chess Club` roster entry.
pub fn activity_routes() -> Router<ActivityAppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:activity_name/signup", post(sign_up))
        .route("/activities/:activity_name/unregister", post(unregister))
}
