/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use crate::http::{ObeliskError, Result};

use super::enums::AgentKind;

/// Body of `POST /tasks`. Params are agent-specific polymorphic data
/// and stay an opaque JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub agent: AgentKind,
    pub params: serde_json::Value,
}

impl CreateTaskRequest {
    pub fn new(agent: AgentKind, params: serde_json::Value) -> Self {
        Self { agent, params }
    }

    /// Build a request from raw params text typed by the operator.
    ///
    /// Malformed JSON fails here, before any request is issued.
    pub fn from_raw_params(agent: AgentKind, raw_params: &str) -> Result<Self> {
        let params = serde_json::from_str(raw_params).map_err(|err| {
            ObeliskError::InvalidParams {
                message: err.to_string(),
            }
        })?;
        Ok(Self { agent, params })
    }
}
