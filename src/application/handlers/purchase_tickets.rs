//! PurchaseTicketsHandler - Command handler for ticket purchases.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::domain::foundation::{DomainError, PurchaseId, Timestamp};
use crate::domain::ticketing::{
    AccountId, InvalidPurchaseError, PurchaseAggregate, PurchaseRules, TicketLineItem,
};
use crate::ports::{PaymentError, ReservationError, SeatReservationService, TicketPaymentService};

/// Command to purchase tickets for an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTicketsCommand {
    #[serde(deserialize_with = "deserialize_account_id")]
    pub account_id: i64,
    pub line_items: Vec<TicketLineItem>,
}

/// Accepts any JSON integer and leaves the sign check to the handler;
/// anything else is an invalid account rather than a type error.
fn deserialize_account_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    raw.as_i64()
        .ok_or_else(|| serde::de::Error::custom(InvalidPurchaseError::InvalidAccountId))
}

/// Receipt for a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    pub purchase_id: PurchaseId,
    pub account_id: AccountId,
    pub total_amount: u64,
    pub seats_reserved: u64,
    pub ticket_count: u64,
    pub purchased_at: Timestamp,
}

/// Errors returned by [`PurchaseTicketsHandler`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// The request broke a purchase rule. No collaborator was called.
    #[error(transparent)]
    Invalid(#[from] InvalidPurchaseError),

    /// The payment collaborator failed. No seats were reserved.
    #[error("Payment failed: {0}")]
    Payment(#[from] PaymentError),

    /// The reservation collaborator failed after payment succeeded.
    #[error("Seat reservation failed: {0}")]
    Reservation(#[from] ReservationError),
}

impl From<PurchaseError> for DomainError {
    fn from(err: PurchaseError) -> Self {
        match err {
            PurchaseError::Invalid(e) => e.into(),
            PurchaseError::Payment(e) => e.into(),
            PurchaseError::Reservation(e) => e.into(),
        }
    }
}

/// Handler for ticket purchases.
///
/// Validates the account, aggregates the line items, enforces the purchase
/// rules and only then charges the account and reserves seats, in that order.
/// Payment is not refunded if the reservation fails afterwards.
pub struct PurchaseTicketsHandler {
    payment_service: Arc<dyn TicketPaymentService>,
    reservation_service: Arc<dyn SeatReservationService>,
    rules: PurchaseRules,
}

impl PurchaseTicketsHandler {
    pub fn new(
        payment_service: Arc<dyn TicketPaymentService>,
        reservation_service: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self::with_rules(payment_service, reservation_service, PurchaseRules::default())
    }

    pub fn with_rules(
        payment_service: Arc<dyn TicketPaymentService>,
        reservation_service: Arc<dyn SeatReservationService>,
        rules: PurchaseRules,
    ) -> Self {
        Self {
            payment_service,
            reservation_service,
            rules,
        }
    }

    pub fn rules(&self) -> &PurchaseRules {
        &self.rules
    }

    /// Purchase `line_items` for `account_id`.
    pub async fn purchase(
        &self,
        account_id: i64,
        line_items: &[TicketLineItem],
    ) -> Result<PurchaseReceipt, PurchaseError> {
        // 1. Validate account before doing any work
        let account_id = AccountId::new(account_id).inspect_err(|e| {
            warn!(account_id, code = %e.code(), "Rejected ticket purchase");
        })?;

        // 2. Aggregate totals
        let aggregate = PurchaseAggregate::from_line_items(line_items);
        debug!(
            %account_id,
            line_items = line_items.len(),
            total_amount = aggregate.total_amount,
            total_seats = aggregate.total_seats,
            total_tickets = aggregate.total_ticket_count,
            has_adult = aggregate.has_adult,
            "Aggregated ticket request"
        );

        // 3. Enforce purchase rules
        self.rules.enforce(&aggregate).inspect_err(|e| {
            warn!(%account_id, code = %e.code(), "Rejected ticket purchase");
        })?;

        // 4. Charge, then reserve
        self.payment_service
            .make_payment(account_id, aggregate.total_amount)
            .await
            .inspect_err(|e| {
                error!(%account_id, amount = aggregate.total_amount, "Payment failed: {}", e);
            })?;

        self.reservation_service
            .reserve_seats(account_id, aggregate.total_seats)
            .await
            .inspect_err(|e| {
                error!(%account_id, seats = aggregate.total_seats, "Seat reservation failed: {}", e);
            })?;

        let receipt = PurchaseReceipt {
            purchase_id: PurchaseId::new(),
            account_id,
            total_amount: aggregate.total_amount,
            seats_reserved: aggregate.total_seats,
            ticket_count: aggregate.total_ticket_count,
            purchased_at: Timestamp::now(),
        };

        info!(
            purchase_id = %receipt.purchase_id,
            %account_id,
            amount = receipt.total_amount,
            seats = receipt.seats_reserved,
            "Tickets purchased"
        );

        Ok(receipt)
    }

    pub async fn handle(&self, cmd: PurchaseTicketsCommand) -> Result<PurchaseReceipt, PurchaseError> {
        self.purchase(cmd.account_id, &cmd.line_items).await
    }
}
