//! HTTP adapter for the activity roster.
//!
//! Provides REST endpoints for listing activities and managing signups.

mod dto;
mod handlers;
mod routes;

pub use dto::{ActivitiesResponse, ActivityResponse, EmailQuery, ErrorResponse, MessageResponse};
pub use handlers::{list_activities, sign_up, unregister, ActivityApiError, ActivityAppState};
pub use routes::activity_routes;
