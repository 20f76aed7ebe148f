//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TicketPaymentService` - Charges an account for a priced purchase
//! - `SeatReservationService` - Reserves seats for an account

mod payment_service;
mod seat_reservation_service;

pub use payment_service::{PaymentError, PaymentErrorCode, TicketPaymentService};
pub use seat_reservation_service::{
    ReservationError, ReservationErrorCode, SeatReservationService,
};
