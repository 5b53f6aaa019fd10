//! UnregisterHandler - Command handler for removing a student from an activity.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::activity::{Activity, ActivityError};
use crate::domain::foundation::DomainError;
use crate::ports::ActivityRepository;

/// Command to remove a student from an activity.
#[derive(Debug, Clone)]
pub struct UnregisterCommand {
    pub activity_name: String,
    pub email: String,
}

/// Result of a successful unregistration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterResult {
    pub activity_name: String,
    pub email: String,
}

impl UnregisterResult {
    /// Confirmation shown to the student.
    pub fn message(&self) -> String {
        format!("Unregistered {} from {}", self.email, self.activity_name)
    }
}

/// Handler for unregistering students.
pub struct UnregisterHandler {
    repository: Arc<dyn ActivityRepository>,
}

impl UnregisterHandler {
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UnregisterCommand) -> Result<UnregisterResult, ActivityError> {
        let email = cmd.email.as_str();
        self.repository
            .modify(
                &cmd.activity_name,
                Box::new(move |activity: &mut Activity| {
                    activity.unregister(email).map_err(DomainError::from)
                }),
            )
            .await
            .map_err(|err| {
                let err = ActivityError::from(err);
                debug!(activity = %cmd.activity_name, email = %cmd.email, error = %err, "Unregister rejected");
                err
            })?;

        info!(activity = %cmd.activity_name, email = %cmd.email, "Student unregistered");

        Ok(UnregisterResult {
            activity_name: cmd.activity_name,
            email: cmd.email,
        })
    }
}
