/*
[INPUT]:  Optional status filter
[OUTPUT]: Assigned task records for the current group
[POS]:    HTTP layer - task listing endpoint backing the list loader
[UPDATE]: When adding task filters or changing query parameters
*/

use crate::http::{AssignlyClient, Result};
use crate::types::{Task, TaskStatus};
use reqwest::Method;

impl AssignlyClient {
    /// Query assigned tasks with an optional status filter
    ///
    /// GET /api/tasks?status={status}
    pub async fn query_tasks(&self, status: Option<TaskStatus>) -> Result<Vec<Task>> {
        let endpoint = match status {
            Some(status) => format!("/api/tasks?status={}", status.as_query()),
            None => "/api/tasks".to_string(),
        };

        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}
