//! Pure domain layer for the taskbridge platform.
//!
//! Holds everything that does not touch the database or HTTP: the error
//! taxonomy, shared id/timestamp types, role and status vocabularies, the
//! capability check, and typed activity-log metadata. Zero internal deps so
//! both the API server and any future CLI tooling can use it.

pub mod activity;
pub mod billing;
pub mod error;
pub mod rbac;
pub mod roles;
pub mod status;
pub mod types;
