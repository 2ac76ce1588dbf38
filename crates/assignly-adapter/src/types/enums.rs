/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    InProcess,
    Done,
}

impl TaskStatus {
    /// Wire value used in query strings
    pub fn as_query(&self) -> &'static str {
        match self {
            TaskStatus::InProcess => "in_process",
            TaskStatus::Done => "done",
        }
    }
}
