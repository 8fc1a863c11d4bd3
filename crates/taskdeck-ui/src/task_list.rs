//! Task-list controller: owns the view state and translates user intents
//! into HTTP calls.

use std::sync::Arc;

use taskdeck_services::TaskClient;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::service;
use crate::state::{TaskEvent, ViewState};

/// Stateful view controller for the task list.
///
/// Every user intent spawns an independent network call and returns
/// immediately; outcomes arrive as [`TaskEvent`]s and are applied via
/// [`handle_event`](Self::handle_event) (or the [`tick`](Self::tick) /
/// [`try_tick`](Self::try_tick) loop drivers). Multiple calls may be in
/// flight at once; none cancels another and none is retried.
pub struct TaskListModel {
    state: ViewState,
    client: Arc<TaskClient>,
    tx: UnboundedSender<TaskEvent>,
    rx: UnboundedReceiver<TaskEvent>,
    activated: bool,
}

impl TaskListModel {
    pub fn new(client: Arc<TaskClient>) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            state: ViewState::default(),
            client,
            tx,
            rx,
            activated: false,
        }
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// First activation triggers the task and stats loads exactly once,
    /// concurrently. Subsequent calls are no-ops.
    pub fn activate(&mut self) {
        if self.activated {
            return;
        }
        self.activated = true;
        self.load_tasks();
        self.load_stats();
    }

    /// Reload the task list. Sets `loading` until the fetch resolves.
    pub fn load_tasks(&mut self) {
        self.state.loading = true;
        self.state.error_message.clear();
        service::request_fetch_tasks(&self.tx, self.client.clone());
    }

    /// Reload aggregate counts. Best-effort: failures are logged, never
    /// shown in the error banner.
    pub fn load_stats(&self) {
        service::request_fetch_stats(&self.tx, self.client.clone());
    }

    /// Update the add-task input draft.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.draft_title = text.into();
    }

    /// Submit the draft as a new task.
    ///
    /// A whitespace-only draft issues no request and changes no state. The
    /// draft is sent as typed; the service owns trimming and validation.
    pub fn add_task(&mut self) {
        if self.state.draft_title.trim().is_empty() {
            return;
        }
        self.state.error_message.clear();
        service::request_create(&self.tx, self.client.clone(), self.state.draft_title.clone());
    }

    /// Mark the task completed.
    pub fn complete_task(&mut self, id: i64) {
        self.state.error_message.clear();
        service::request_complete(&self.tx, self.client.clone(), id);
    }

    /// Delete the task.
    pub fn delete_task(&mut self, id: i64) {
        self.state.error_message.clear();
        service::request_delete(&self.tx, self.client.clone(), id);
    }

    /// Apply one completion event to the state.
    ///
    /// Events are applied strictly in arrival order; when two mutations on
    /// the same task overlap in flight, the last response to arrive wins.
    /// A successful mutation triggers the best-effort stats refresh.
    pub fn handle_event(&mut self, event: TaskEvent) {
        tracing::debug!(?event, "applying task event");
        if self.state.apply(event) {
            self.load_stats();
        }
    }

    /// Await the next completion event and apply it.
    pub async fn tick(&mut self) -> bool {
        match self.rx.recv().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    /// Apply one already-arrived event, if any. Non-blocking variant of
    /// [`tick`](Self::tick) for UI polling loops.
    pub fn try_tick(&mut self) -> bool {
        match self.rx.try_recv() {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }
}
