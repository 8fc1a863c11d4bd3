pub mod service;
pub mod state;
pub mod task_list;

pub use state::{TaskEvent, ViewState};
pub use task_list::TaskListModel;
