//! Ticketing error types.
//!
//! The `Display` text of both enums is part of the observable contract:
//! callers and tests match on it verbatim.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while constructing a [`TicketLineItem`](super::TicketLineItem).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeConstraintError {
    #[error("type must be ADULT, CHILD, or INFANT")]
    InvalidCategory { given: String },

    #[error("quantity must be a positive integer")]
    InvalidQuantity { given: String },
}

impl TypeConstraintError {
    pub fn invalid_category(given: impl Into<String>) -> Self {
        TypeConstraintError::InvalidCategory {
            given: given.into(),
        }
    }

    pub fn invalid_quantity(given: impl ToString) -> Self {
        TypeConstraintError::InvalidQuantity {
            given: given.to_string(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TypeConstraintError::InvalidCategory { .. } => ErrorCode::InvalidTicketType,
            TypeConstraintError::InvalidQuantity { .. } => ErrorCode::InvalidTicketQuantity,
        }
    }
}

impl From<TypeConstraintError> for DomainError {
    fn from(err: TypeConstraintError) -> Self {
        let given = match &err {
            TypeConstraintError::InvalidCategory { given }
            | TypeConstraintError::InvalidQuantity { given } => given.clone(),
        };
        DomainError::new(err.code(), err.to_string()).with_detail("given", given)
    }
}

/// Errors raised when a purchase request breaks a business rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidPurchaseError {
    #[error("Invalid account ID: Must be a positive integer.")]
    InvalidAccountId,

    #[error("Ticket limit exceeded: Cannot purchase more than {max} tickets at a time.")]
    TicketLimitExceeded { max: u32 },

    #[error("At least one Adult ticket is required for a valid purchase.")]
    AdultRequired,
}

impl InvalidPurchaseError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            InvalidPurchaseError::InvalidAccountId => ErrorCode::InvalidAccountId,
            InvalidPurchaseError::TicketLimitExceeded { .. } => ErrorCode::TicketLimitExceeded,
            InvalidPurchaseError::AdultRequired => ErrorCode::AdultTicketRequired,
        }
    }
}

impl From<InvalidPurchaseError> for DomainError {
    fn from(err: InvalidPurchaseError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
