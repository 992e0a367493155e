//! Contracts for the external services a purchase is delegated to.
//!
//! Both services are opaque: they either complete or report an error. A
//! [`TicketService`](crate::TicketService) calls each exactly once per valid
//! purchase, payment first.

use crate::errors::{PaymentError, ReservationError};
use crate::types::AccountId;
use std::sync::Arc;

/// Charges an account for a ticket purchase.
pub trait TicketPaymentService {
    /// Charges `total_amount_to_pay` to the account.
    fn make_payment(
        &self,
        account_id: AccountId,
        total_amount_to_pay: u64,
    ) -> Result<(), PaymentError>;
}

/// Reserves seats for a ticket purchase.
pub trait SeatReservationService {
    /// Reserves `total_seats_to_allocate` seats for the account.
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> Result<(), ReservationError>;
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(
        &self,
        account_id: AccountId,
        total_amount_to_pay: u64,
    ) -> Result<(), PaymentError> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Box<T> {
    fn make_payment(
        &self,
        account_id: AccountId,
        total_amount_to_pay: u64,
    ) -> Result<(), PaymentError> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(
        &self,
        account_id: AccountId,
        total_amount_to_pay: u64,
    ) -> Result<(), PaymentError> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> Result<(), ReservationError> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Box<T> {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> Result<(), ReservationError> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u32,
    ) -> Result<(), ReservationError> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}
