//! Activity-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | AlreadyRegistered | 400 |
//! | NotRegistered | 400 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by roster operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    /// No activity with this exact name exists in the roster.
    #[error("Activity not found")]
    NotFound { activity: String },

    /// The email already appears in the activity's participants.
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },

    /// The email does not appear in the activity's participants.
    #[error("{email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },

    /// Infrastructure error.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ActivityError {
    pub fn not_found(activity: impl Into<String>) -> Self {
        ActivityError::NotFound {
            activity: activity.into(),
        }
    }

    pub fn already_registered(activity: impl Into<String>, email: impl Into<String>) -> Self {
        ActivityError::AlreadyRegistered {
            activity: activity.into(),
            email: email.into(),
        }
    }

    pub fn not_registered(activity: impl Into<String>, email: impl Into<String>) -> Self {
        ActivityError::NotRegistered {
            activity: activity.into(),
            email: email.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ActivityError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ActivityError::NotFound { .. } => ErrorCode::ActivityNotFound,
            ActivityError::AlreadyRegistered { .. } => ErrorCode::AlreadyRegistered,
            ActivityError::NotRegistered { .. } => ErrorCode::NotRegistered,
            ActivityError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// Returns the user-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Name of the activity the error refers to, when there is one.
    pub fn activity(&self) -> Option<&str> {
        match self {
            ActivityError::NotFound { activity }
            | ActivityError::AlreadyRegistered { activity, .. }
            | ActivityError::NotRegistered { activity, .. } => Some(activity),
            ActivityError::Infrastructure(_) => None,
        }
    }
}

impl From<DomainError> for ActivityError {
    fn from(err: DomainError) -> Self {
        let activity = err.detail("activity").unwrap_or_default().to_string();
        let email = err.detail("email").unwrap_or_default().to_string();

        match err.code {
            ErrorCode::ActivityNotFound => ActivityError::NotFound { activity },
            ErrorCode::AlreadyRegistered => ActivityError::AlreadyRegistered { activity, email },
            ErrorCode::NotRegistered => ActivityError::NotRegistered { activity, email },
            ErrorCode::InternalError => ActivityError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ActivityError> for DomainError {
    fn from(err: ActivityError) -> Self {
        let mut domain = DomainError::new(err.code(), err.message());
        if let Some(activity) = err.activity() {
            domain = domain.with_detail("activity", activity);
        }
        match &err {
            ActivityError::AlreadyRegistered { email, .. }
            | ActivityError::NotRegistered { email, .. } => domain.with_detail("email", email),
            _ => domain,
        }
    }
}
