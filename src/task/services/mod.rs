//! Application services for task orchestration.

mod lifecycle;

pub use lifecycle::{
    CreateTaskRequest, EditTaskRequest, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService,
};
