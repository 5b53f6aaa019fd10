//! Activity reader port (read side).
//!
//! Read-only access to the roster for listings.

use crate::domain::activity::Activity;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Reader port for roster queries.
#[async_trait]
pub trait ActivityReader: Send + Sync {
    /// Snapshot of every activity, in roster order.
    async fn list_all(&self) -> Result<Vec<Activity>, DomainError>;
}
