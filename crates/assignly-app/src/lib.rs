/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Assignly presentation-state crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod avatar;
pub mod signup;
pub mod task_list;

// Re-export the state types the rendering layer consumes
pub use signup::{FormFields, SignupController, SignupFormState};
pub use task_list::TaskListState;
