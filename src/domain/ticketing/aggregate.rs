//! PurchaseAggregate - per-request totals derived from line items.

use serde::Serialize;

use super::{TicketCategory, TicketLineItem};

/// Totals for one purchase request, computed in a single pass.
///
/// Addition and OR are commutative, so the order of line items never changes
/// the result. Repeated categories simply accumulate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PurchaseAggregate {
    pub total_amount: u64,
    pub total_seats: u64,
    pub total_ticket_count: u64,
    pub has_adult: bool,
}

impl PurchaseAggregate {
    pub fn from_line_items(line_items: &[TicketLineItem]) -> Self {
        line_items.iter().fold(Self::default(), |acc, item| acc.add(item))
    }

    /// Returns the aggregate with one more line item folded in.
    pub fn add(self, item: &TicketLineItem) -> Self {
        Self {
            total_amount: self.total_amount.saturating_add(item.cost()),
            total_seats: self.total_seats.saturating_add(item.seats()),
            total_ticket_count: self
                .total_ticket_count
                .saturating_add(u64::from(item.quantity())),
            has_adult: self.has_adult || item.category() == TicketCategory::Adult,
        }
    }
}

impl<'a> FromIterator<&'a TicketLineItem> for PurchaseAggregate {
    fn from_iter<I: IntoIterator<Item = &'a TicketLineItem>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |acc, item| acc.add(item))
    }
}
