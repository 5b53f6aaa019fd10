//! HTTP adapters - REST API implementations.
//!
//! `activity` exposes the roster endpoints; `app` assembles them with the
//! root redirect, static files, and middleware into the served router.

pub mod activity;
mod app;

// Re-export key types for convenience
pub use activity::{activity_routes, ActivityAppState};
pub use app::app_router;
