//! In-memory adapters for the `cinema-tickets` library
//!
//! This crate provides in-memory implementations of the
//! [`TicketPaymentService`] and [`SeatReservationService`] traits, useful for
//! testing and development scenarios where no real payment gateway or seat
//! booking system is available.
//!
//! Every accepted call is recorded. Services built over the same
//! [`CallJournal`] share one history, which shows the order in which a purchase
//! reached them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::{Arc, RwLock};

use cinema_tickets::errors::{PaymentError, ReservationError};
use cinema_tickets::external::{SeatReservationService, TicketPaymentService};
use cinema_tickets::types::AccountId;
use tracing::debug;

/// A call accepted by one of the in-memory services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalCall {
    /// An account was charged.
    Payment {
        /// Account charged
        account_id: AccountId,
        /// Amount charged
        amount: u64,
    },
    /// Seats were reserved.
    Reservation {
        /// Account the seats belong to
        account_id: AccountId,
        /// Seats reserved
        seats: u32,
    },
}

/// Thread-safe, append-only history of accepted calls.
///
/// Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct CallJournal {
    calls: Arc<RwLock<Vec<ExternalCall>>>,
}

impl CallJournal {
    /// Create a new empty journal
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: ExternalCall) {
        self.calls.write().expect("RwLock poisoned").push(call);
    }

    /// Returns every recorded call, oldest first.
    pub fn calls(&self) -> Vec<ExternalCall> {
        self.calls.read().expect("RwLock poisoned").clone()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.calls.read().expect("RwLock poisoned").len()
    }

    /// Whether no call has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Shared switch that makes a service reject every call with the stored reason.
#[derive(Debug, Clone, Default)]
struct FailureSwitch {
    reason: Arc<RwLock<Option<String>>>,
}

impl FailureSwitch {
    fn set(&self, reason: Option<String>) {
        *self.reason.write().expect("RwLock poisoned") = reason;
    }

    fn reason(&self) -> Option<String> {
        self.reason.read().expect("RwLock poisoned").clone()
    }
}

/// In-memory payment service that records every charge.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentService {
    journal: CallJournal,
    failure: FailureSwitch,
}

impl InMemoryPaymentService {
    /// Create a payment service with its own journal
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a payment service recording into a shared journal
    pub fn with_journal(journal: CallJournal) -> Self {
        Self {
            journal,
            failure: FailureSwitch::default(),
        }
    }

    /// Decline every following payment with `reason`.
    pub fn fail_with(&self, reason: impl Into<String>) {
        self.failure.set(Some(reason.into()));
    }

    /// Accept payments again.
    pub fn recover(&self) {
        self.failure.set(None);
    }

    /// Returns every accepted charge, oldest first.
    pub fn payments(&self) -> Vec<(AccountId, u64)> {
        self.journal
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                ExternalCall::Payment { account_id, amount } => Some((account_id, amount)),
                ExternalCall::Reservation { .. } => None,
            })
            .collect()
    }

    /// Total amount charged to an account.
    pub fn total_charged(&self, account_id: AccountId) -> u64 {
        self.payments()
            .into_iter()
            .filter(|(charged, _)| *charged == account_id)
            .map(|(_, amount)| amount)
            .sum()
    }
}

impl TicketPaymentService for InMemoryPaymentService {
    fn make_payment(
        &self,
        account_id: AccountId,
        total_amount_to_pay: u64,
    ) -> Result<(), PaymentError> {
        if let Some(reason) = self.failure.reason() {
            return Err(PaymentError::Declined {
                account_id,
                amount: total_amount_to_pay,
                reason,
            });
        }

        self.journal.record(ExternalCall::Payment {
            account_id,
            amount: total_amount_to_pay,
        });
        debug!(%account_id, amount = total_amount_to_pay, "Payment recorded");
        Ok(())
    }
}

/// In-memory seat reservation service that records every booking.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservationService {
    journal: CallJournal,
    failure: FailureSwitch,
}

impl InMemorySeatReservationService {
    /// Create a reservation service with its own journal
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reservation service recording into a shared journal
    pub fn with_journal(journal: CallJournal) -> Self {
        Self {
            journal,
            failure: FailureSwitch::default(),
        }
    }

    /// Reject every following reservation with `reason`.
    pub fn fail_with(&self, reason: impl Into<String>) {
        self.failure.set(Some(reason.into()));
    }

    /// Accept reservations again.
    pub fn recover(&self) {
        self.failure.set(None);
    }

    /// Returns every accepted reservation, oldest first.
    pub fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.journal
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                ExternalCall::Reservation { account_id, seats } => Some((account_id, seats)),
                ExternalCall::Payment { .. } => None,
            })
            .collect()
    }

    /// Total seats reserved for an account.
    pub fn seats_reserved(&self, account_id: AccountId) -> u64 {
        self.reservations()
            .into_iter()
            .filter(|(reserved, _)| *reserved == account_id)
            .map(|(_, seats)| u64::from(seats))
            .sum()
    }
}

impl SeatReservationService for InMemorySeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> Result<(), ReservationError> {
        if let Some(reason) = self.failure.reason() {
            return Err(ReservationError::Rejected {
                account_id,
                seats: total_seats_to_allocate,
                reason,
            });
        }

        self.journal.record(ExternalCall::Reservation {
            account_id,
            seats: total_seats_to_allocate,
        });
        debug!(%account_id, seats = total_seats_to_allocate, "Reservation recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(raw: i64) -> AccountId {
        AccountId::try_new(raw).unwrap()
    }

    #[test]
    fn payments_are_recorded_in_order() {
        let payments = InMemoryPaymentService::new();
        payments.make_payment(account(1), 20).unwrap();
        payments.make_payment(account(2), 50).unwrap();
        payments.make_payment(account(1), 10).unwrap();

        assert_eq!(
            payments.payments(),
            vec![(account(1), 20), (account(2), 50), (account(1), 10)]
        );
        assert_eq!(payments.total_charged(account(1)), 30);
    }

    #[test]
    fn clones_share_history() {
        let reservations = InMemorySeatReservationService::new();
        let clone = reservations.clone();
        clone.reserve_seat(account(4), 3).unwrap();

        assert_eq!(reservations.reservations(), vec![(account(4), 3)]);
        assert_eq!(reservations.seats_reserved(account(4)), 3);
    }

    #[test]
    fn shared_journal_keeps_call_order_across_services() {
        let journal = CallJournal::new();
        let payments = InMemoryPaymentService::with_journal(journal.clone());
        let reservations = InMemorySeatReservationService::with_journal(journal.clone());

        payments.make_payment(account(1), 50).unwrap();
        reservations.reserve_seat(account(1), 3).unwrap();

        assert_eq!(
            journal.calls(),
            vec![
                ExternalCall::Payment {
                    account_id: account(1),
                    amount: 50
                },
                ExternalCall::Reservation {
                    account_id: account(1),
                    seats: 3
                },
            ]
        );
        assert_eq!(payments.payments(), vec![(account(1), 50)]);
        assert_eq!(reservations.reservations(), vec![(account(1), 3)]);
    }

    #[test]
    fn failing_payment_is_declined_and_not_recorded() {
        let payments = InMemoryPaymentService::new();
        payments.fail_with("card expired");

        let error = payments.make_payment(account(9), 40).unwrap_err();

        assert_eq!(
            error,
            PaymentError::Declined {
                account_id: account(9),
                amount: 40,
                reason: "card expired".to_string(),
            }
        );
        assert!(payments.payments().is_empty());

        payments.recover();
        assert!(payments.make_payment(account(9), 40).is_ok());
    }

    #[test]
    fn failing_reservation_is_rejected_and_not_recorded() {
        let journal = CallJournal::new();
        let reservations = InMemorySeatReservationService::with_journal(journal.clone());
        reservations.fail_with("screen full");

        assert!(matches!(
            reservations.reserve_seat(account(2), 5),
            Err(ReservationError::Rejected { seats: 5, .. })
        ));
        assert!(journal.is_empty());
        assert_eq!(journal.len(), 0);
    }
}
