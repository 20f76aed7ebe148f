//! Ticket payment port.
//!
//! Defines the contract for the external service that charges an account for
//! a priced purchase. The service either succeeds or returns an error; there is
//! no partial-success signal.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::ticketing::AccountId;

/// Port for the payment collaborator.
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    /// Charge `total_amount` to the account.
    async fn make_payment(&self, account_id: AccountId, total_amount: u64)
        -> Result<(), PaymentError>;
}

/// Payment collaborator error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error category.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Whether the operation may succeed if retried.
    pub retryable: bool,
}

impl PaymentError {
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            retryable: code.is_retryable(),
        }
    }

    pub fn declined(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::Declined, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::Unavailable, message)
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

impl From<PaymentError> for DomainError {
    fn from(err: PaymentError) -> Self {
        DomainError::new(ErrorCode::PaymentFailed, err.message)
            .with_detail("payment_code", err.code.to_string())
    }
}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// The charge was refused.
    Declined,

    /// The payment service could not be reached.
    Unavailable,

    /// Provider-side failure.
    ProviderError,
}

impl PaymentErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentErrorCode::Unavailable)
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::Declined => "declined",
            PaymentErrorCode::Unavailable => "unavailable",
            PaymentErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}
