//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, error codes)
//! - `ticketing` - Ticket categories, line items, totals and purchase rules

pub mod foundation;
pub mod ticketing;
