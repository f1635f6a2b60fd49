//! Well-known role name constants.
//!
//! These must match the seed data in the `create_roles` migration.
//! `manager` is the elevated role: it bypasses per-record ownership checks.

pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_STAFF: &str = "staff";
pub const ROLE_CLIENT: &str = "client";
