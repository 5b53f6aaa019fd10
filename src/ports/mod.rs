//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Roster Ports
//!
//! - `ActivityRepository` - Change a single activity atomically (write side)
//! - `ActivityReader` - List the whole roster (read side)

mod activity_reader;
mod activity_repository;

pub use activity_reader::ActivityReader;
pub use activity_repository::{ActivityChange, ActivityRepository};
