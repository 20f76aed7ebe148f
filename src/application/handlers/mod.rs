//! Application handlers.
//!
//! Command handlers that orchestrate domain operations and call out to ports.

mod purchase_tickets;

pub use purchase_tickets::{
    PurchaseError, PurchaseReceipt, PurchaseTicketsCommand, PurchaseTicketsHandler,
};
