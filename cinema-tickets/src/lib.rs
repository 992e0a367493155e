//! `cinema-tickets` - Cinema ticket purchase validation
//!
//! This library validates ticket purchase requests against the cinema's
//! business rules, prices them, and delegates payment and seat reservation to
//! external services.
//!
//! A purchase flows through four stages:
//!
//! 1. **Construction**: each [`TicketTypeRequest`] rejects negative counts
//! 2. **Aggregation**: requests are summed per [`TicketType`] into an [`AggregatedOrder`]
//! 3. **Validation**: the order is checked against the purchase rules, fail-fast
//! 4. **Fulfilment**: the account is charged, then seats are reserved
//!
//! # Example
//!
//! ```rust,ignore
//! use cinema_tickets::{TicketService, TicketType, TicketTypeRequest};
//!
//! let service = TicketService::new(payment_gateway, seat_booking);
//! let outcome = service.purchase_tickets(
//!     1,
//!     &[
//!         TicketTypeRequest::new(TicketType::Adult, 2)?,
//!         TicketTypeRequest::new(TicketType::Child, 1)?,
//!     ],
//! )?;
//! println!("{outcome}");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod errors;
pub mod external;
pub mod order;
pub mod request;
pub mod ticket_service;
pub mod types;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{MaxTicketsPerPurchase, TicketPrices, TicketingConfig};
pub use errors::{
    ConfigError, InvalidPurchase, PaymentError, PurchaseError, PurchaseResult, ReservationError,
};
pub use external::{SeatReservationService, TicketPaymentService};
pub use order::{AggregatedOrder, OrderTotals, PurchaseOutcome};
pub use request::{parse_requests, TicketTypeRequest};
pub use ticket_service::TicketService;
pub use types::{AccountId, TicketType};
