//! In-memory seat reservation service.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ticketing::AccountId;
use crate::ports::{ReservationError, SeatReservationService};

/// A reservation accepted by [`InMemorySeatReservationService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedReservation {
    pub account_id: AccountId,
    pub total_seats: u64,
}

/// Reservation service that keeps reservations in memory.
#[derive(Default, Clone)]
pub struct InMemorySeatReservationService {
    inner: Arc<Mutex<ReservationState>>,
}

#[derive(Default)]
struct ReservationState {
    reservations: Vec<RecordedReservation>,
    attempts: usize,
    next_error: Option<ReservationError>,
}

impl InMemorySeatReservationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `reserve_seats` call fail with `error`.
    pub fn fail_next(&self, error: ReservationError) {
        self.state().next_error = Some(error);
    }

    pub fn reservations(&self) -> Vec<RecordedReservation> {
        self.state().reservations.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state().attempts
    }

    /// Total seats reserved across all successful calls.
    pub fn seats_reserved(&self) -> u64 {
        self.state().reservations.iter().map(|r| r.total_seats).sum()
    }

    fn state(&self) -> MutexGuard<'_, ReservationState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SeatReservationService for InMemorySeatReservationService {
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        total_seats: u64,
    ) -> Result<(), ReservationError> {
        let mut state = self.state();
        state.attempts += 1;

        if let Some(error) = state.next_error.take() {
            tracing::debug!(%account_id, total_seats, "Injected reservation failure");
            return Err(error);
        }

        state.reservations.push(RecordedReservation {
            account_id,
            total_seats,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: i64) -> AccountId {
        AccountId::new(id).unwrap()
    }

    #[tokio::test]
    async fn records_reservations() {
        let service = InMemorySeatReservationService::new();
        service.reserve_seats(account(1), 3).await.unwrap();
        service.reserve_seats(account(1), 2).await.unwrap();

        assert_eq!(service.reservations().len(), 2);
        assert_eq!(service.seats_reserved(), 5);
    }

    #[tokio::test]
    async fn injected_error_is_returned_and_not_recorded() {
        let service = InMemorySeatReservationService::new();
        service.fail_next(ReservationError::insufficient_seats("sold out"));

        let result = service.reserve_seats(account(1), 4).await;

        assert_eq!(result, Err(ReservationError::insufficient_seats("sold out")));
        assert!(service.reservations().is_empty());
        assert_eq!(service.call_count(), 1);
    }
}
