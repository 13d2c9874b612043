//! Axum bindings for the service-layer operations.

pub mod allocations;
pub mod projects;
pub mod timebills;
