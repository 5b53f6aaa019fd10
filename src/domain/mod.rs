//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, error codes)
//! - `activity` - Activity aggregate, the roster, and its seed data

pub mod activity;
pub mod foundation;
