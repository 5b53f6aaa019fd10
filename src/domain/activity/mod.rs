//! Activity domain module.
//!
//! Handles the extracurricular roster: which activities exist and which
//! students are signed up for each.
//!
//! # Module Structure
//!
//! - `aggregate` - Activity aggregate entity
//! - `roster` - Ordered collection of activities with all-or-nothing modification
//! - `errors` - ActivityError and its mapping to error codes
//! - `seed` - The startup roster

mod aggregate;
mod errors;
mod roster;
mod seed;

pub use aggregate::Activity;
pub use errors::ActivityError;
pub use roster::Roster;
pub use seed::seed_roster;
