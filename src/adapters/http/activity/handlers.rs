//! HTTP handlers for activity endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::activity::{
    ListActivitiesHandler, ListActivitiesQuery, SignUpCommand, SignUpHandler, UnregisterCommand,
    UnregisterHandler,
};
use crate::domain::activity::ActivityError;
use crate::ports::{ActivityReader, ActivityRepository};

use super::dto::{ActivitiesResponse, EmailQuery, ErrorResponse, MessageResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; the roster itself lives behind the `Arc`s.
#[derive(Clone)]
pub struct ActivityAppState {
    pub activity_repository: Arc<dyn ActivityRepository>,
    pub activity_reader: Arc<dyn ActivityReader>,
}

impl ActivityAppState {
    pub fn new(
        activity_repository: Arc<dyn ActivityRepository>,
        activity_reader: Arc<dyn ActivityReader>,
    ) -> Self {
        Self {
            activity_repository,
            activity_reader,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn list_activities_handler(&self) -> ListActivitiesHandler {
        ListActivitiesHandler::new(self.activity_reader.clone())
    }

    pub fn sign_up_handler(&self) -> SignUpHandler {
        SignUpHandler::new(self.activity_repository.clone())
    }

    pub fn unregister_handler(&self) -> UnregisterHandler {
        UnregisterHandler::new(self.activity_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /activities - List every activity with its participants
pub async fn list_activities(
    State(state): State<ActivityAppState>,
) -> Result<impl IntoResponse, ActivityApiError> {
    let activities = state
        .list_activities_handler()
        .handle(ListActivitiesQuery)
        .await?;

    let response: ActivitiesResponse = activities.iter().collect();
    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /activities/:activity_name/signup?email= - Sign a student up
pub async fn sign_up(
    State(state): State<ActivityAppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, ActivityApiError> {
    let cmd = SignUpCommand {
        activity_name,
        email: query.email,
    };

    let result = state.sign_up_handler().handle(cmd).await?;

    Ok(Json(MessageResponse::new(result.message())))
}

/// POST /activities/:activity_name/unregister?email= - Remove a student
pub async fn unregister(
    State(state): State<ActivityAppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, ActivityApiError> {
    let cmd = UnregisterCommand {
        activity_name,
        email: query.email,
    };

    let result = state.unregister_handler().handle(cmd).await?;

    Ok(Json(MessageResponse::new(result.message())))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct ActivityApiError(ActivityError);

impl From<ActivityError> for ActivityApiError {
    fn from(err: ActivityError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ActivityApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            ActivityError::NotFound { .. } => StatusCode::NOT_FOUND,
            ActivityError::AlreadyRegistered { .. } | ActivityError::NotRegistered { .. } => {
                StatusCode::BAD_REQUEST
            }
            ActivityError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = match &self.0 {
            ActivityError::Infrastructure(msg) => {
                tracing::error!("Roster infrastructure failure: {}", msg);
                "Internal server error".to_string()
            }
            other => other.message(),
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryActivityRepository;
    use axum::body::to_bytes;

    fn test_state() -> ActivityAppState {
        let repo = Arc::new(InMemoryActivityRepository::seeded());
        ActivityAppState::new(repo.clone(), repo)
    }

    async fn error_parts(err: ActivityError) -> (StatusCode, ErrorResponse) {
        let response = ActivityApiError::from(err).into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Error Mapping Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, body) = error_parts(ActivityError::not_found("Fake Club")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.detail, "Activity not found");
    }

    #[tokio::test]
    async fn already_registered_maps_to_400() {
        let (status, body) =
            error_parts(ActivityError::already_registered("Chess Club", "a@mergington.edu")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.detail.contains("already signed up"));
    }

    #[tokio::test]
    async fn not_registered_maps_to_400() {
        let (status, body) =
            error_parts(ActivityError::not_registered("Chess Club", "a@mergington.edu")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.detail.contains("not registered"));
    }

    #[tokio::test]
    async fn infrastructure_hides_details() {
        let (status, body) = error_parts(ActivityError::infrastructure("lock poisoned")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.detail, "Internal server error");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Handler Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn sign_up_handler_returns_message() {
        let state = test_state();
        let response = sign_up(
            State(state.clone()),
            Path("Chess Club".to_string()),
            Query(EmailQuery {
                email: "newstudent@mergington.edu".to_string(),
            }),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let message: MessageResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            message.message,
            "Signed up newstudent@mergington.edu for Chess Club"
        );
    }

    #[tokio::test]
    async fn unregister_handler_reports_missing_student() {
        let err = unregister(
            State(test_state()),
            Path("Chess Club".to_string()),
            Query(EmailQuery {
                email: "ghost@mergington.edu".to_string(),
            }),
        )
        .await
        .err()
        .unwrap();

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_handler_returns_all_activities() {
        let response = list_activities(State(test_state()))
            .await
            .unwrap()
            .into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let listed: ActivitiesResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(listed.0.len(), 9);
        assert_eq!(listed.0["Gym Class"].max_participants, 30);
    }
}
