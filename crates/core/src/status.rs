//! Status vocabularies for service requests, projects, and tasks.
//!
//! Statuses are stored as lowercase text columns with CHECK constraints, so
//! the constants here must match the migration SQL exactly. Each group has a
//! validator used by handlers before writing a caller-supplied status.

/// Service request lifecycle: `pending` -> `approved` | `rejected`.
pub mod request_status {
    pub const PENDING: &str = "pending";
    pub const APPROVED: &str = "approved";
    pub const REJECTED: &str = "rejected";

    pub fn is_valid(status: &str) -> bool {
        matches!(status, PENDING | APPROVED | REJECTED)
    }
}

/// Project lifecycle statuses.
pub mod project_status {
    pub const ACTIVE: &str = "active";
    pub const ON_HOLD: &str = "on_hold";
    pub const COMPLETE: &str = "complete";
    pub const CANCELLED: &str = "cancelled";

    pub fn is_valid(status: &str) -> bool {
        matches!(status, ACTIVE | ON_HOLD | COMPLETE | CANCELLED)
    }
}

/// Kanban column statuses for tasks.
pub mod task_status {
    pub const TODO: &str = "todo";
    pub const IN_PROGRESS: &str = "in_progress";
    pub const REVIEW: &str = "review";
    pub const DONE: &str = "done";

    pub fn is_valid(status: &str) -> bool {
        matches!(status, TODO | IN_PROGRESS | REVIEW | DONE)
    }
}
