pub mod task;

pub use task::{Task, TaskListResponse, TaskPriority, TaskStatus};
