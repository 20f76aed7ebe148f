//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and the error vocabulary shared by
//! the ticketing domain and the application layer.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::PurchaseId;
pub use timestamp::Timestamp;
