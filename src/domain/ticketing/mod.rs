//! Ticketing domain module.
//!
//! Validated ticket requests, pricing, and the purchase-level business rules.
//!
//! # Module Structure
//!
//! - `category` - TicketCategory and the fixed price table
//! - `line_item` - TicketLineItem value object
//! - `account` - AccountId
//! - `aggregate` - PurchaseAggregate totals
//! - `rules` - PurchaseRules (ticket cap, adult requirement)
//! - `errors` - TypeConstraintError and InvalidPurchaseError

mod account;
mod aggregate;
mod category;
mod errors;
mod line_item;
mod rules;

pub use account::AccountId;
pub use aggregate::PurchaseAggregate;
pub use category::TicketCategory;
pub use errors::{InvalidPurchaseError, TypeConstraintError};
pub use line_item::TicketLineItem;
pub use rules::{PurchaseRules, DEFAULT_MAX_TICKETS_PER_PURCHASE};
