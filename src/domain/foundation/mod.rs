//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared by every domain module and port.

mod errors;

pub use errors::{DomainError, ErrorCode};
