/*
[INPUT]:  Task requests and identities
[OUTPUT]: Task creation, status, and history responses
[POS]:    HTTP layer - task service endpoints
[UPDATE]: When adding new task endpoints or changing response format
*/

use crate::http::{ObeliskClient, Result};
use crate::types::{CreateTaskRequest, CreatedTask, TaskId, TaskRecord, TaskSnapshot};
use reqwest::Method;
use std::collections::BTreeMap;

impl ObeliskClient {
    /// Submit a task for execution; returns its identity immediately
    ///
    /// POST /tasks
    pub async fn create_task(&self, req: CreateTaskRequest) -> Result<CreatedTask> {
        let builder = self.request(Method::POST, "/tasks")?.json(&req);
        self.send_json(builder).await
    }

    /// Query the current status and result of a task
    ///
    /// GET /tasks/{id}
    pub async fn query_task(&self, id: &TaskId) -> Result<TaskSnapshot> {
        let endpoint = format!("/tasks/{}", id);
        let builder = self.request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Fetch the full mapping of known tasks
    ///
    /// GET /tasks_all
    pub async fn list_all_tasks(&self) -> Result<BTreeMap<String, TaskRecord>> {
        let builder = self.request(Method::GET, "/tasks_all")?;
        self.send_json(builder).await
    }
}
