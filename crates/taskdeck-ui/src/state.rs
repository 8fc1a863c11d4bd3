//! View state for the task list and the events that mutate it.

use taskdeck_services::{Stats, Task, TaskApiError};

/// The client's locally held, authoritative-for-display snapshot.
///
/// Owned exclusively by [`crate::TaskListModel`]; mutated only by applying
/// [`TaskEvent`]s, so all transitions happen on the controller's thread.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Tasks in server order, replaced wholesale on each successful fetch.
    pub tasks: Vec<Task>,
    /// The add-task input draft.
    pub draft_title: String,
    /// Aggregate counts, owned by the service.
    pub stats: Stats,
    /// True while a task-list fetch is in flight.
    pub loading: bool,
    /// Error banner text; empty means no error.
    pub error_message: String,
}

/// Completion message from one spawned network call.
#[derive(Debug)]
pub enum TaskEvent {
    /// Result of fetching the task list
    TasksFetched(Result<Vec<Task>, TaskApiError>),
    /// Result of fetching aggregate counts
    StatsFetched(Result<Stats, TaskApiError>),
    /// Result of creating a new task
    TaskCreated(Result<Task, TaskApiError>),
    /// Result of marking a task completed
    TaskCompleted {
        id: i64,
        result: Result<Task, TaskApiError>,
    },
    /// Result of deleting a task
    TaskDeleted {
        id: i64,
        result: Result<(), TaskApiError>,
    },
}

impl ViewState {
    /// Apply one completion event.
    ///
    /// Returns true when the event was a successful mutation, which owes a
    /// best-effort stats refresh as a secondary effect.
    pub fn apply(&mut self, event: TaskEvent) -> bool {
        match event {
            TaskEvent::TasksFetched(result) => {
                // Released on success and failure alike
                self.loading = false;
                match result {
                    Ok(tasks) => {
                        self.tasks = tasks;
                        self.error_message.clear();
                    }
                    Err(e) => self.error_message = e.user_message(),
                }
                false
            }
            TaskEvent::StatsFetched(result) => {
                match result {
                    Ok(stats) => self.stats = stats,
                    // Best-effort: logged, never surfaced in the banner
                    Err(e) => tracing::warn!("Stats fetch failed: {}", e),
                }
                false
            }
            TaskEvent::TaskCreated(result) => match result {
                Ok(task) => {
                    self.tasks.push(task);
                    self.draft_title.clear();
                    true
                }
                Err(e) => {
                    self.error_message = e.user_message();
                    false
                }
            },
            TaskEvent::TaskCompleted { id, result } => match result {
                Ok(updated) => {
                    // A stale id (task deleted meanwhile) degrades to a no-op
                    if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) {
                        *slot = updated;
                    }
                    true
                }
                Err(e) => {
                    self.error_message = e.user_message();
                    false
                }
            },
            TaskEvent::TaskDeleted { id, result } => match result {
                Ok(()) => {
                    self.tasks.retain(|t| t.id != id);
                    true
                }
                Err(e) => {
                    self.error_message = e.user_message();
                    false
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            completed,
        }
    }

    fn api_error() -> TaskApiError {
        TaskApiError::Status {
            status: 500,
            body: "boom".to_string(),
        }
    }

    #[test]
    fn fetch_success_replaces_tasks_and_releases_loading() {
        let mut state = ViewState {
            loading: true,
            error_message: "old error".to_string(),
            ..Default::default()
        };

        let refresh = state.apply(TaskEvent::TasksFetched(Ok(vec![
            task(1, "a", false),
            task(2, "b", true),
        ])));

        assert!(!refresh);
        assert_eq!(state.tasks.len(), 2);
        assert_eq!(state.tasks[0].id, 1);
        assert_eq!(state.tasks[1].id, 2);
        assert!(!state.loading);
        assert!(state.error_message.is_empty());
    }

    #[test]
    fn fetch_failure_keeps_tasks_and_releases_loading() {
        let mut state = ViewState {
            tasks: vec![task(1, "a", false)],
            loading: true,
            ..Default::default()
        };
        let before = state.tasks.clone();

        state.apply(TaskEvent::TasksFetched(Err(api_error())));

        assert_eq!(state.tasks, before);
        assert!(!state.loading);
        assert!(!state.error_message.is_empty());
    }

    #[test]
    fn stats_success_replaces_stats() {
        let mut state = ViewState::default();

        state.apply(TaskEvent::StatsFetched(Ok(Stats {
            total: 3,
            completed: 1,
            pending: 2,
        })));

        assert_eq!(state.stats.total, 3);
        assert_eq!(state.stats.pending, 2);
    }

    #[test]
    fn stats_failure_is_silent() {
        let mut state = ViewState {
            stats: Stats {
                total: 5,
                completed: 2,
                pending: 3,
            },
            ..Default::default()
        };

        state.apply(TaskEvent::StatsFetched(Err(api_error())));

        assert_eq!(state.stats.total, 5);
        assert!(state.error_message.is_empty());
    }

    #[test]
    fn create_success_appends_and_clears_draft() {
        let mut state = ViewState {
            tasks: vec![task(1, "a", false)],
            draft_title: "Buy milk".to_string(),
            ..Default::default()
        };

        let refresh = state.apply(TaskEvent::TaskCreated(Ok(task(7, "Buy milk", false))));

        assert!(refresh, "successful create owes a stats refresh");
        assert_eq!(state.tasks.len(), 2);
        assert_eq!(state.tasks[1], task(7, "Buy milk", false));
        assert!(state.draft_title.is_empty());
    }

    #[test]
    fn create_failure_keeps_tasks_and_draft() {
        let mut state = ViewState {
            tasks: vec![task(1, "a", false)],
            draft_title: "Buy milk".to_string(),
            ..Default::default()
        };
        let before = state.tasks.clone();

        let refresh = state.apply(TaskEvent::TaskCreated(Err(api_error())));

        assert!(!refresh);
        assert_eq!(state.tasks, before);
        assert_eq!(state.draft_title, "Buy milk");
        assert!(!state.error_message.is_empty());
    }

    #[test]
    fn complete_success_replaces_only_matching_task() {
        let mut state = ViewState {
            tasks: vec![task(1, "a", false), task(2, "b", false), task(3, "c", false)],
            ..Default::default()
        };

        let refresh = state.apply(TaskEvent::TaskCompleted {
            id: 2,
            result: Ok(task(2, "b", true)),
        });

        assert!(refresh);
        assert_eq!(state.tasks[0], task(1, "a", false));
        assert_eq!(state.tasks[1], task(2, "b", true));
        assert_eq!(state.tasks[2], task(3, "c", false));
    }

    #[test]
    fn complete_with_stale_id_is_noop() {
        let mut state = ViewState {
            tasks: vec![task(1, "a", false)],
            ..Default::default()
        };
        let before = state.tasks.clone();

        state.apply(TaskEvent::TaskCompleted {
            id: 99,
            result: Ok(task(99, "gone", true)),
        });

        assert_eq!(state.tasks, before);
    }

    #[test]
    fn delete_success_removes_exactly_one_task() {
        let mut state = ViewState {
            tasks: vec![task(1, "a", false), task(2, "b", false), task(3, "c", false)],
            ..Default::default()
        };

        let refresh = state.apply(TaskEvent::TaskDeleted { id: 2, result: Ok(()) });

        assert!(refresh);
        assert_eq!(state.tasks, vec![task(1, "a", false), task(3, "c", false)]);
    }

    #[test]
    fn failed_mutation_leaves_tasks_untouched() {
        let mut state = ViewState {
            tasks: vec![task(1, "a", false), task(2, "b", false)],
            ..Default::default()
        };
        let before = state.tasks.clone();

        state.apply(TaskEvent::TaskCompleted {
            id: 2,
            result: Err(api_error()),
        });
        assert_eq!(state.tasks, before);
        assert!(!state.error_message.is_empty());

        state.error_message.clear();
        state.apply(TaskEvent::TaskDeleted {
            id: 2,
            result: Err(api_error()),
        });
        assert_eq!(state.tasks, before);
        assert!(!state.error_message.is_empty());
    }
}
