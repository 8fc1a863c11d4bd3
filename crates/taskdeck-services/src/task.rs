//! Wire types for the task service.

use serde::{Deserialize, Serialize};

/// A single task as returned by the service.
///
/// The id is assigned server-side and treated as opaque by the client;
/// tasks are only ever replaced wholesale with the server's representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Aggregate task counts, owned entirely by the service.
///
/// The service maintains `total == completed + pending`; the client does
/// not re-derive or enforce it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
}

/// Request to create a new task.
#[derive(Debug, Clone, Serialize)]
pub struct TaskCreateRequest {
    pub title: String,
}
