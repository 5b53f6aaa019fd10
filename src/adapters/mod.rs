//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - Process-lifetime roster storage
//! - `http` - Axum REST API and static front-end

pub mod http;
pub mod memory;

pub use self::http::{app_router, ActivityAppState};
pub use memory::InMemoryActivityRepository;
