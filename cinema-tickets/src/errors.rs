//! Error types for cinema ticket purchases.
//!
//! The error design separates three concerns:
//!
//! - **InvalidPurchase**: a business rule or request-construction violation.
//!   Always raised before any external service is called.
//! - **PaymentError** / **ReservationError**: failures reported by the
//!   external collaborators after validation succeeded.
//! - **PurchaseError**: the union returned from
//!   [`TicketService::purchase_tickets`](crate::TicketService::purchase_tickets).
//!
//! Collaborator failures are propagated unchanged. A reservation failure after
//! a successful payment leaves the account charged without seats; no
//! compensation is attempted.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! match service.purchase_tickets(account_id, &requests) {
//!     Ok(outcome) => println!("{outcome}"),
//!     Err(PurchaseError::Invalid(violation)) => {
//!         // Show the violated rule to the purchaser
//!         display_error(&violation);
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```

use crate::types::{AccountId, TicketType};
use thiserror::Error;

/// A purchase request that violates a business rule.
///
/// Each variant identifies exactly one rule. Validation is fail-fast, so a
/// rejected purchase reports the first violated rule only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPurchase {
    /// The account id is zero or negative.
    #[error("Account ID should be greater than zero, got {0}")]
    InvalidAccountId(i64),

    /// No adult ticket was requested.
    #[error("There should be at least one adult to book a ticket")]
    AdultTicketRequired,

    /// More tickets were requested than a single purchase allows.
    #[error("A maximum of {max} tickets can be booked at a time, {requested} requested")]
    TooManyTickets {
        /// Total tickets requested across all categories
        requested: u64,
        /// Configured maximum per purchase
        max: u32,
    },

    /// More infants than adults were requested.
    #[error(
        "Each infant must be accompanied by an adult, since they sit on an adult's lap: {infants} infant(s) for {adults} adult(s)"
    )]
    UnaccompaniedInfants {
        /// Infant tickets requested
        infants: u32,
        /// Adult tickets requested
        adults: u32,
    },

    /// The computed amount to pay was zero.
    #[error("Error in ticket price calculation, total amount is zero")]
    AmountCalculation,

    /// The amount to pay does not fit in a `u64` under the configured prices.
    #[error("Error in ticket price calculation, total amount overflows")]
    AmountOverflow,

    /// The computed seat count was zero.
    #[error("Error in seat count calculation, no seats to reserve")]
    SeatCalculation,

    /// A ticket request was constructed with a negative count.
    #[error("Number of {ticket_type} tickets cannot be negative, got {count}")]
    NegativeTicketCount {
        /// Category of the rejected request
        ticket_type: TicketType,
        /// The negative count supplied
        count: i64,
    },

    /// A ticket request count does not fit the ticket count range.
    #[error("Number of {ticket_type} tickets is out of range, got {count}")]
    TicketCountOutOfRange {
        /// Category of the rejected request
        ticket_type: TicketType,
        /// The count supplied, always non-negative
        count: u64,
    },

    /// A ticket request used a category key other than ADULT, CHILD or INFANT.
    #[error("Unknown ticket type '{0}', expected one of ADULT, CHILD, INFANT")]
    UnknownTicketType(String),

    /// A ticket request document could not be read.
    #[error("Malformed ticket request: {0}")]
    MalformedRequest(String),
}

/// Failure reported by a [`TicketPaymentService`](crate::TicketPaymentService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The payment provider refused the charge.
    #[error("Payment of {amount} declined for account {account_id}: {reason}")]
    Declined {
        /// Account that was to be charged
        account_id: AccountId,
        /// Amount that was to be charged
        amount: u64,
        /// Reason given by the provider
        reason: String,
    },

    /// The payment provider could not be reached.
    #[error("Payment service unavailable: {0}")]
    Unavailable(String),
}

/// Failure reported by a [`SeatReservationService`](crate::SeatReservationService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    /// The reservation provider refused the booking.
    #[error("Reservation of {seats} seat(s) rejected for account {account_id}: {reason}")]
    Rejected {
        /// Account the seats were requested for
        account_id: AccountId,
        /// Number of seats requested
        seats: u32,
        /// Reason given by the provider
        reason: String,
    },

    /// The reservation provider could not be reached.
    #[error("Seat reservation service unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned from a purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// The purchase was rejected before any external call.
    #[error("Invalid purchase: {0}")]
    Invalid(#[from] InvalidPurchase),

    /// Payment failed. No reservation was attempted.
    #[error("Payment failed: {0}")]
    Payment(#[from] PaymentError),

    /// Reservation failed after the payment went through.
    #[error("Seat reservation failed: {0}")]
    Reservation(#[from] ReservationError),
}

impl PurchaseError {
    /// Returns the violated rule if the purchase was rejected by validation.
    pub const fn as_invalid_purchase(&self) -> Option<&InvalidPurchase> {
        match self {
            Self::Invalid(violation) => Some(violation),
            Self::Payment(_) | Self::Reservation(_) => None,
        }
    }

    /// Whether the purchase was rejected by validation.
    pub const fn is_invalid_purchase(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Errors that can occur while loading a [`TicketingConfig`](crate::TicketingConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed or holds invalid values.
    #[error("Failed to parse ticketing configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Type alias for purchase results.
pub type PurchaseResult<T> = Result<T, PurchaseError>;
