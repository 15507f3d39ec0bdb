/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{TaskId, TaskStatus};

/// Response to `POST /tasks`. Only the identity is required; the
/// service may echo back agent and initial status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedTask {
    pub id: TaskId,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

/// Response to `GET /tasks/{id}`. `result` stays null until the task
/// reaches a terminal status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    #[serde(default)]
    pub id: Option<TaskId>,
    #[serde(default)]
    pub agent: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

/// One entry of the `GET /tasks_all` mapping. Read-only snapshot
/// record with no per-entry lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    #[serde(default)]
    pub agent: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}
