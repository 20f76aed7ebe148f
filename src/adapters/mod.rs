//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `collaborators` - In-memory payment and seat reservation services

pub mod collaborators;

pub use collaborators::{
    InMemoryPaymentService, InMemorySeatReservationService, RecordedPayment, RecordedReservation,
};
