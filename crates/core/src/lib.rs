//! Domain types and request-shaping logic for the suitebridge service.
//!
//! This crate is I/O-free. It defines the record field model shared with the
//! store layer, the violation-accumulating batch validators, and the
//! input-to-field-set mappers for the two entity shapes the service handles
//! (timebills and resource allocations). Persistence lives behind the
//! `RecordStore` trait in `suitebridge-store`.

pub mod allocation;
pub mod dates;
pub mod error;
pub mod record;
pub mod scalar;
pub mod timebill;
pub mod types;
pub mod violation;
