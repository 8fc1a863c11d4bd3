//! Fire-and-forget task-service requests.
//! Each helper spawns one network call; the result comes back as a
//! [`TaskEvent`] on the channel.

use std::sync::Arc;

use taskdeck_services::{TaskClient, TaskCreateRequest};
use tokio::sync::mpsc::UnboundedSender;

use crate::state::TaskEvent;

/// Request the task list asynchronously.
/// Sends `TasksFetched` on the channel when complete.
pub fn request_fetch_tasks(tx: &UnboundedSender<TaskEvent>, client: Arc<TaskClient>) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.list_tasks().await;
        let _ = tx.send(TaskEvent::TasksFetched(result));
    });
}

/// Request aggregate counts asynchronously.
/// Sends `StatsFetched` on the channel when complete.
pub fn request_fetch_stats(tx: &UnboundedSender<TaskEvent>, client: Arc<TaskClient>) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.stats().await;
        let _ = tx.send(TaskEvent::StatsFetched(result));
    });
}

/// Request creation of a new task asynchronously.
/// Sends `TaskCreated` on the channel when complete.
pub fn request_create(tx: &UnboundedSender<TaskEvent>, client: Arc<TaskClient>, title: String) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.create_task(TaskCreateRequest { title }).await;
        let _ = tx.send(TaskEvent::TaskCreated(result));
    });
}

/// Request completion of a task asynchronously.
/// Sends `TaskCompleted` on the channel when complete.
pub fn request_complete(tx: &UnboundedSender<TaskEvent>, client: Arc<TaskClient>, id: i64) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.complete_task(id).await;
        let _ = tx.send(TaskEvent::TaskCompleted { id, result });
    });
}

/// Request deletion of a task asynchronously.
/// Sends `TaskDeleted` on the channel when complete.
pub fn request_delete(tx: &UnboundedSender<TaskEvent>, client: Arc<TaskClient>, id: i64) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.delete_task(id).await;
        let _ = tx.send(TaskEvent::TaskDeleted { id, result });
    });
}
