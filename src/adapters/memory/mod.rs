//! In-memory adapters.

mod in_memory_activity_repository;

pub use in_memory_activity_repository::InMemoryActivityRepository;
