//! GetSprintHandler - Query handler for a sprint with its issues expanded.

use std::sync::Arc;

use crate::domain::foundation::SprintId;
use crate::domain::sprint::SprintError;
use crate::ports::{SprintDetail, SprintReader};

/// Query to get a sprint by ID.
#[derive(Debug, Clone)]
pub struct GetSprintQuery {
    pub sprint_id: SprintId,
}

/// Handler for retrieving sprint details.
pub struct GetSprintHandler {
    reader: Arc<dyn SprintReader>,
}

impl GetSprintHandler {
    pub fn new(reader: Arc<dyn SprintReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetSprintQuery) -> Result<SprintDetail, SprintError> {
        self.reader
            .get_detail(&query.sprint_id)
            .await?
            .ok_or(SprintError::not_found(query.sprint_id))
    }
}
