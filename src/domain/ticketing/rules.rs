//! Business rules applied to a fully aggregated purchase.

use super::{InvalidPurchaseError, PurchaseAggregate};

/// Default cap on tickets per purchase.
pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u32 = 25;

/// Purchase-level rules: the ticket cap and the adult requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseRules {
    max_tickets_per_purchase: u32,
}

impl PurchaseRules {
    pub fn new(max_tickets_per_purchase: u32) -> Self {
        Self {
            max_tickets_per_purchase,
        }
    }

    pub fn max_tickets_per_purchase(&self) -> u32 {
        self.max_tickets_per_purchase
    }

    /// Checks the aggregate against every rule.
    ///
    /// The ticket cap is checked first, so a request that is both too large
    /// and adult-less reports the cap.
    pub fn enforce(&self, aggregate: &PurchaseAggregate) -> Result<(), InvalidPurchaseError> {
        if aggregate.total_ticket_count > u64::from(self.max_tickets_per_purchase) {
            return Err(InvalidPurchaseError::TicketLimitExceeded {
                max: self.max_tickets_per_purchase,
            });
        }

        if !aggregate.has_adult {
            return Err(InvalidPurchaseError::AdultRequired);
        }

        Ok(())
    }
}

impl Default for PurchaseRules {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TICKETS_PER_PURCHASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticketing::{TicketCategory, TicketLineItem};
    use proptest::prelude::*;

    fn aggregate(items: &[(TicketCategory, i64)]) -> PurchaseAggregate {
        let items: Vec<TicketLineItem> = items
            .iter()
            .map(|(category, quantity)| TicketLineItem::new(*category, *quantity).unwrap())
            .collect();
        PurchaseAggregate::from_line_items(&items)
    }

    #[test]
    fn default_cap_is_twenty_five() {
        assert_eq!(PurchaseRules::default().max_tickets_per_purchase(), 25);
    }

    #[test]
    fn accepts_exactly_the_cap() {
        let agg = aggregate(&[(TicketCategory::Adult, 25)]);
        assert!(PurchaseRules::default().enforce(&agg).is_ok());
    }

    #[test]
    fn rejects_single_line_over_cap() {
        let agg = aggregate(&[(TicketCategory::Adult, 26)]);
        assert_eq!(
            PurchaseRules::default().enforce(&agg),
            Err(InvalidPurchaseError::TicketLimitExceeded { max: 25 })
        );
    }

    #[test]
    fn cap_applies_across_line_items() {
        let agg = aggregate(&[(TicketCategory::Adult, 20), (TicketCategory::Child, 6)]);
        assert_eq!(
            PurchaseRules::default().enforce(&agg),
            Err(InvalidPurchaseError::TicketLimitExceeded { max: 25 })
        );
    }

    #[test]
    fn infants_count_towards_cap() {
        let agg = aggregate(&[(TicketCategory::Adult, 1), (TicketCategory::Infant, 25)]);
        assert!(PurchaseRules::default().enforce(&agg).is_err());
    }

    #[test]
    fn requires_an_adult() {
        for agg in [
            aggregate(&[(TicketCategory::Child, 2)]),
            aggregate(&[(TicketCategory::Infant, 1)]),
            aggregate(&[]),
        ] {
            assert_eq!(
                PurchaseRules::default().enforce(&agg),
                Err(InvalidPurchaseError::AdultRequired)
            );
        }
    }

    #[test]
    fn limit_wins_over_missing_adult() {
        let agg = aggregate(&[(TicketCategory::Child, 30)]);
        assert_eq!(
            PurchaseRules::default().enforce(&agg),
            Err(InvalidPurchaseError::TicketLimitExceeded { max: 25 })
        );
    }

    #[test]
    fn custom_cap_is_reported_in_message() {
        let agg = aggregate(&[(TicketCategory::Adult, 11)]);
        let err = PurchaseRules::new(10).enforce(&agg).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Ticket limit exceeded: Cannot purchase more than 10 tickets at a time."
        );
    }

    proptest! {
        /// Property: with an adult present, acceptance depends only on the cap.
        #[test]
        fn adult_requests_pass_iff_within_cap(adults in 1i64..40, children in 1i64..40) {
            let agg = aggregate(&[(TicketCategory::Adult, adults), (TicketCategory::Child, children)]);
            let result = PurchaseRules::default().enforce(&agg);
            prop_assert_eq!(result.is_ok(), adults + children <= 25);
        }
    }
}
