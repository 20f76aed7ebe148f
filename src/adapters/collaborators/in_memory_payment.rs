//! In-memory payment service.
//!
//! Records every charge instead of contacting a gateway. Supports:
//! - Call tracking for assertions
//! - Error injection for the next call

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ticketing::AccountId;
use crate::ports::{PaymentError, TicketPaymentService};

/// A charge accepted by [`InMemoryPaymentService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedPayment {
    pub account_id: AccountId,
    pub total_amount: u64,
}

/// Payment service that keeps charges in memory.
///
/// # Example
///
/// ```ignore
/// let payments = InMemoryPaymentService::new();
/// payments.fail_next(PaymentError::declined("Test decline"));
/// ```
#[derive(Default, Clone)]
pub struct InMemoryPaymentService {
    inner: Arc<Mutex<PaymentState>>,
}

#[derive(Default)]
struct PaymentState {
    payments: Vec<RecordedPayment>,
    attempts: usize,
    next_error: Option<PaymentError>,
}

impl InMemoryPaymentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `make_payment` call fail with `error`.
    pub fn fail_next(&self, error: PaymentError) {
        self.state().next_error = Some(error);
    }

    /// Successful charges, in call order.
    pub fn payments(&self) -> Vec<RecordedPayment> {
        self.state().payments.clone()
    }

    /// Number of `make_payment` calls, including failed ones.
    pub fn call_count(&self) -> usize {
        self.state().attempts
    }

    fn state(&self) -> MutexGuard<'_, PaymentState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl TicketPaymentService for InMemoryPaymentService {
    async fn make_payment(
        &self,
        account_id: AccountId,
        total_amount: u64,
    ) -> Result<(), PaymentError> {
        let mut state = self.state();
        state.attempts += 1;

        if let Some(error) = state.next_error.take() {
            tracing::debug!(%account_id, total_amount, "Injected payment failure");
            return Err(error);
        }

        state.payments.push(RecordedPayment {
            account_id,
            total_amount,
        });
        Ok(())
    }
}
