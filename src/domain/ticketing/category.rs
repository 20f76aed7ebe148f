//! Ticket category definitions and the fixed price table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TypeConstraintError;

/// Category of a ticket.
///
/// Determines the unit price and whether the ticket occupies a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    /// Full price, occupies a seat. At least one is required per purchase.
    Adult,

    /// Reduced price, occupies a seat.
    Child,

    /// Free, travels on an adult's lap and takes no seat.
    Infant,
}

impl TicketCategory {
    /// Every category, in display order.
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Infant,
    ];

    /// Returns the price of a single ticket of this category.
    pub fn unit_price(&self) -> u64 {
        match self {
            TicketCategory::Adult => 25,
            TicketCategory::Child => 15,
            TicketCategory::Infant => 0,
        }
    }

    /// Returns true if tickets of this category need a reserved seat.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketCategory::Infant)
    }

    /// Returns the canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Adult => "ADULT",
            TicketCategory::Child => "CHILD",
            TicketCategory::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketCategory {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| TypeConstraintError::invalid_category(s))
    }
}
