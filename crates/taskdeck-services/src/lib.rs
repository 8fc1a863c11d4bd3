pub mod client;
pub mod error;
pub mod task;

pub use client::TaskClient;
pub use error::TaskApiError;
pub use task::{Stats, Task, TaskCreateRequest};
