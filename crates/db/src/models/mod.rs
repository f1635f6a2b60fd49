//! Row structs and create/update DTOs for every table.

pub mod activity;
pub mod assignment;
pub mod comment;
pub mod project;
pub mod service;
pub mod service_request;
pub mod session;
pub mod task;
pub mod team_member;
pub mod user;
