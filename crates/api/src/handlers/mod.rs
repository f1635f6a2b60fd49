//! HTTP request handlers, one module per resource.

pub mod activity;
pub mod auth;
pub mod comments;
pub mod projects;
pub mod service_requests;
pub mod services;
pub mod tasks;
pub mod team;
