//! Seat reservation port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::ticketing::AccountId;

/// Port for the seat-reservation collaborator.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// Reserve `total_seats` seats for the account.
    async fn reserve_seats(&self, account_id: AccountId, total_seats: u64)
        -> Result<(), ReservationError>;
}

/// Seat reservation collaborator error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationError {
    pub code: ReservationErrorCode,
    pub message: String,
    pub retryable: bool,
}

impl ReservationError {
    pub fn new(code: ReservationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            retryable: code.is_retryable(),
        }
    }

    pub fn insufficient_seats(message: impl Into<String>) -> Self {
        Self::new(ReservationErrorCode::InsufficientSeats, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ReservationErrorCode::Unavailable, message)
    }
}

impl std::fmt::Display for ReservationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ReservationError {}

impl From<ReservationError> for DomainError {
    fn from(err: ReservationError) -> Self {
        DomainError::new(ErrorCode::ReservationFailed, err.message)
            .with_detail("reservation_code", err.code.to_string())
    }
}

/// Reservation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationErrorCode {
    /// Not enough seats left.
    InsufficientSeats,

    /// The reservation service could not be reached.
    Unavailable,
}

impl ReservationErrorCode {
    pub fn is_retryable(&self) -> bool {
        matches!(self, ReservationErrorCode::Unavailable)
    }
}

impl std::fmt::Display for ReservationErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReservationErrorCode::InsufficientSeats => "insufficient_seats",
            ReservationErrorCode::Unavailable => "unavailable",
        };
        write!(f, "{}", s)
    }
}
