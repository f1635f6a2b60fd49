//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod assignment_repo;
pub mod comment_repo;
pub mod project_repo;
pub mod role_repo;
pub mod service_repo;
pub mod service_request_repo;
pub mod session_repo;
pub mod task_repo;
pub mod team_member_repo;
pub mod user_repo;

pub use activity_repo::ActivityLogRepo;
pub use assignment_repo::AssignmentRepo;
pub use comment_repo::CommentRepo;
pub use project_repo::ProjectRepo;
pub use role_repo::RoleRepo;
pub use service_repo::ServiceRepo;
pub use service_request_repo::ServiceRequestRepo;
pub use session_repo::SessionRepo;
pub use task_repo::TaskRepo;
pub use team_member_repo::TeamMemberRepo;
pub use user_repo::UserRepo;
