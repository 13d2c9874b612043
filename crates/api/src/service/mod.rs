//! Endpoint logic as plain typed functions over the record store.
//!
//! Each operation takes a typed request and the [`RecordStore`] it should run
//! against, and returns a typed result. The axum handlers in
//! [`crate::handlers`] are thin bindings around these functions, so request
//! semantics stay testable without HTTP.
//!
//! [`RecordStore`]: suitebridge_store::RecordStore

pub mod allocations;
pub mod projects;
pub mod timebills;
