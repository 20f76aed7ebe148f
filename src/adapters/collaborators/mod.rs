//! In-memory collaborator adapters.
//!
//! Implement the `TicketPaymentService` and `SeatReservationService` ports
//! without external systems, recording every call for later inspection.

mod in_memory_payment;
mod in_memory_reservation;

pub use in_memory_payment::{InMemoryPaymentService, RecordedPayment};
pub use in_memory_reservation::{InMemorySeatReservationService, RecordedReservation};
