/*
[INPUT]:  Task records from the adapter
[OUTPUT]: TaskListState labels consumed by the list loader and renderer
[POS]:    Presentation layer - task list loading phases
[UPDATE]: When list filters or loading phases change
*/

use assignly_adapter::Task;

/// Loading phases of the assigned-task list.
///
/// A label set only: the external list loader constructs values and the
/// rendering layer matches on them. Each value is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskListState {
    #[default]
    Idle,
    Loading,
    /// Every task, regardless of status
    All { tasks: Vec<Task> },
    /// Tasks still being worked on
    InProcess { tasks: Vec<Task> },
    /// Completed tasks
    Done { tasks: Vec<Task> },
    Error { message: String },
}

impl TaskListState {
    /// Tasks carried by the populated variants
    pub fn tasks(&self) -> Option<&[Task]> {
        match self {
            TaskListState::All { tasks }
            | TaskListState::InProcess { tasks }
            | TaskListState::Done { tasks } => Some(tasks),
            TaskListState::Idle | TaskListState::Loading | TaskListState::Error { .. } => None,
        }
    }
}
