//! HTTP DTOs (Data Transfer Objects) for activity endpoints.
//!
//! These types define the JSON request/response structure for the roster API.
//! They serve as the boundary between HTTP and the application layer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::activity::Activity;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// `?email=` query string on signup and unregister.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailQuery {
    /// Student email, opaque.
    pub email: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One activity as listed. The name is the key of the enclosing map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityResponse {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description().to_string(),
            schedule: activity.schedule().to_string(),
            max_participants: activity.max_participants(),
            participants: activity.participants().to_vec(),
        }
    }
}

/// Response for `GET /activities`: activity name to activity, in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivitiesResponse(pub IndexMap<String, ActivityResponse>);

impl<'a> FromIterator<&'a Activity> for ActivitiesResponse {
    fn from_iter<I: IntoIterator<Item = &'a Activity>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|a| (a.name().to_string(), ActivityResponse::from(a)))
                .collect(),
        )
    }
}

/// Confirmation for a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response for API errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
