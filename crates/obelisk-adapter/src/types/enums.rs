/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Worker roles selectable at submission time. The roster is fixed by
/// the task service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentKind {
    #[serde(rename = "CodeArchitect")]
    CodeArchitect,
    #[serde(rename = "IdeasAgent")]
    IdeasAgent,
    #[serde(rename = "CreativityAgent")]
    CreativityAgent,
    #[serde(rename = "QCChecker")]
    QcChecker,
    #[serde(rename = "TestHarnessAgent")]
    TestHarnessAgent,
    #[serde(rename = "SelfScoringAgent")]
    SelfScoringAgent,
}

impl AgentKind {
    pub const ALL: [AgentKind; 6] = [
        AgentKind::CodeArchitect,
        AgentKind::IdeasAgent,
        AgentKind::CreativityAgent,
        AgentKind::QcChecker,
        AgentKind::TestHarnessAgent,
        AgentKind::SelfScoringAgent,
    ];

    /// Wire name of the agent, as the service expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::CodeArchitect => "CodeArchitect",
            AgentKind::IdeasAgent => "IdeasAgent",
            AgentKind::CreativityAgent => "CreativityAgent",
            AgentKind::QcChecker => "QCChecker",
            AgentKind::TestHarnessAgent => "TestHarnessAgent",
            AgentKind::SelfScoringAgent => "SelfScoringAgent",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AgentKind::ALL
            .into_iter()
            .find(|agent| agent.as_str() == s)
            .ok_or_else(|| format!("unknown agent: {s}"))
    }
}

/// Opaque task identity assigned by the service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Lifecycle status reported by the service. SUCCESS and FAILURE are
/// terminal; any status the service invents later round-trips through
/// `Other` and is treated as still running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Pending,
    Success,
    Failure,
    Other(String),
}

impl TaskStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Success | TaskStatus::Failure)
    }

    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::Success => "SUCCESS",
            TaskStatus::Failure => "FAILURE",
            TaskStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PENDING" => TaskStatus::Pending,
            "SUCCESS" => TaskStatus::Success,
            "FAILURE" => TaskStatus::Failure,
            _ => TaskStatus::Other(raw),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
