//! ListActivitiesHandler - Query handler for the full roster.

use std::sync::Arc;

use crate::domain::activity::{Activity, ActivityError};
use crate::ports::ActivityReader;

/// Query for every activity. Takes no filters.
#[derive(Debug, Clone, Default)]
pub struct ListActivitiesQuery;

/// Activities in roster order, with current participants.
pub type ListActivitiesResult = Vec<Activity>;

/// Handler for listing the roster.
pub struct ListActivitiesHandler {
    reader: Arc<dyn ActivityReader>,
}

impl ListActivitiesHandler {
    pub fn new(reader: Arc<dyn ActivityReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: ListActivitiesQuery,
    ) -> Result<ListActivitiesResult, ActivityError> {
        self.reader
            .list_all()
            .await
            .map_err(|e| ActivityError::infrastructure(e.to_string()))
    }
}
