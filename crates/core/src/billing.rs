//! Billing constants.
//!
//! All monetary amounts on the platform are stored as integers in minor
//! currency units (cents) to avoid floating-point rounding.

/// Credit granted to a trial project, and to a project materialized from a
/// service request that carries no budget: $300.00, in cents.
pub const TRIAL_CREDIT_CENTS: i64 = 30_000;
