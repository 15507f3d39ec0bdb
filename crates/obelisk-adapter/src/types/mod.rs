/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs and enums for API communication
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod requests;
pub mod responses;

pub use enums::{AgentKind, TaskId, TaskStatus};
pub use requests::CreateTaskRequest;
pub use responses::{CreatedTask, TaskRecord, TaskSnapshot};
