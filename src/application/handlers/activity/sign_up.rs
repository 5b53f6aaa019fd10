//! SignUpHandler - Command handler for adding a student to an activity.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::activity::{Activity, ActivityError};
use crate::domain::foundation::DomainError;
use crate::ports::ActivityRepository;

/// Command to sign a student up for an activity.
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    /// Exact activity name, already percent-decoded.
    pub activity_name: String,
    /// Student email, taken as-is.
    pub email: String,
}

/// Result of a successful signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpResult {
    pub activity_name: String,
    pub email: String,
}

impl SignUpResult {
    /// Confirmation shown to the student.
    pub fn message(&self) -> String {
        format!("Signed up {} for {}", self.email, self.activity_name)
    }
}

/// Handler for signing students up.
///
/// Capacity is not enforced; a signup past it is accepted and logged.
pub struct SignUpHandler {
    repository: Arc<dyn ActivityRepository>,
}

impl SignUpHandler {
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SignUpCommand) -> Result<SignUpResult, ActivityError> {
        let email = cmd.email.as_str();
        let outcome = self
            .repository
            .modify(
                &cmd.activity_name,
                Box::new(move |activity: &mut Activity| {
                    activity.sign_up(email).map_err(DomainError::from)
                }),
            )
            .await
            .map_err(ActivityError::from);

        let activity = match outcome {
            Ok(activity) => activity,
            Err(err) => {
                debug!(activity = %cmd.activity_name, email = %cmd.email, error = %err, "Signup rejected");
                return Err(err);
            }
        };

        if activity.is_over_capacity() {
            warn!(
                activity = %cmd.activity_name,
                participants = activity.participants().len(),
                max_participants = activity.max_participants(),
                "Signup exceeds advisory capacity"
            );
        }
        info!(activity = %cmd.activity_name, email = %cmd.email, "Student signed up");

        Ok(SignUpResult {
            activity_name: cmd.activity_name,
            email: cmd.email,
        })
    }
}
