//! Activity repository port (write side).
//!
//! Defines the contract for changing a single activity on the roster.
//!
//! # Design
//!
//! - **Fixed key set**: activities are never created or deleted after startup
//! - **Atomic changes**: the check and the mutation in `modify` happen as one
//!   step, so concurrent writers never see each other's half-applied state
//!
//! # Example
//!
//! ```ignore
//! async fn add_student(
//!     repo: &dyn ActivityRepository,
//!     name: &str,
//!     email: &str,
//! ) -> Result<Activity, ActivityError> {
//!     let activity = repo
//!         .modify(name, Box::new(|a: &mut Activity| a.sign_up(email).map_err(DomainError::from)))
//!         .await?;
//!     Ok(activity)
//! }
//! ```

use crate::domain::activity::Activity;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// A change to apply to one activity. Returning an error discards it.
pub type ActivityChange<'a> =
    Box<dyn FnOnce(&mut Activity) -> Result<(), DomainError> + Send + 'a>;

/// Repository port for Activity persistence.
///
/// Implementations must ensure:
/// - Names are matched exactly (case-sensitive, no trimming)
/// - No other write to the same roster interleaves with a running `change`
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Apply `change` to the activity called `name` and return it as stored.
    ///
    /// # Errors
    ///
    /// - `ActivityNotFound` if no activity has this name
    /// - the error `change` returned, with nothing stored
    async fn modify(&self, name: &str, change: ActivityChange<'_>)
        -> Result<Activity, DomainError>;
}
