//! The ticket purchase workflow.

use crate::config::TicketingConfig;
use crate::errors::{PurchaseError, PurchaseResult};
use crate::external::{SeatReservationService, TicketPaymentService};
use crate::order::{AggregatedOrder, PurchaseOutcome};
use crate::request::TicketTypeRequest;
use crate::types::TicketType;
use crate::validation::validate_purchase;
use tracing::{debug, error, info, instrument, warn};

/// Validates ticket purchases and fulfils the valid ones.
///
/// A purchase is aggregated per category, priced, checked against the business
/// rules, and only then paid for and reserved. Rejected purchases never reach
/// the external services.
///
/// # Example
///
/// ```rust,ignore
/// let service = TicketService::new(payment_gateway, seat_booking);
/// let requests = [
///     TicketTypeRequest::new(TicketType::Adult, 2)?,
///     TicketTypeRequest::new(TicketType::Infant, 1)?,
/// ];
/// let outcome = service.purchase_tickets(1, &requests)?;
/// assert_eq!(outcome.total_seats, 2);
/// ```
#[derive(Debug, Clone)]
pub struct TicketService<P, R> {
    payments: P,
    reservations: R,
    config: TicketingConfig,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    /// Creates a service with the default price table and ticket limit.
    pub fn new(payments: P, reservations: R) -> Self {
        Self::with_config(payments, reservations, TicketingConfig::default())
    }

    /// Creates a service with a custom configuration.
    pub const fn with_config(payments: P, reservations: R, config: TicketingConfig) -> Self {
        Self {
            payments,
            reservations,
            config,
        }
    }

    /// Returns the configuration in use.
    pub const fn config(&self) -> &TicketingConfig {
        &self.config
    }

    /// Purchases tickets for an account.
    ///
    /// On success the account has been charged the total amount and the seats
    /// have been reserved, in that order.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::Invalid`] if a business rule is violated. Neither
    ///   external service is called.
    /// - [`PurchaseError::Payment`] if the payment fails. No reservation is
    ///   attempted.
    /// - [`PurchaseError::Reservation`] if the reservation fails. The payment
    ///   has already been taken and is not refunded.
    #[instrument(skip(self, requests), fields(requests = requests.len()))]
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchaseOutcome> {
        let order = AggregatedOrder::from_requests(requests);
        debug!(
            adults = order.count(TicketType::Adult),
            children = order.count(TicketType::Child),
            infants = order.count(TicketType::Infant),
            "Aggregated ticket requests"
        );

        let (account_id, totals) = match validate_purchase(account_id, &order, &self.config) {
            Ok(validated) => validated,
            Err(violation) => {
                warn!(%violation, "Ticket purchase rejected");
                return Err(violation.into());
            }
        };
        debug!(
            total_seats = totals.total_seats,
            total_amount = totals.total_amount,
            "Purchase validated"
        );

        self.payments
            .make_payment(account_id, totals.total_amount)
            .map_err(|e| {
                error!(error = %e, "Payment failed");
                PurchaseError::from(e)
            })?;

        self.reservations
            .reserve_seat(account_id, totals.total_seats)
            .map_err(|e| {
                error!(error = %e, "Seat reservation failed after payment");
                PurchaseError::from(e)
            })?;

        let outcome = PurchaseOutcome::new(account_id, totals);
        info!(
            total_seats = outcome.total_seats,
            total_amount = outcome.total_amount,
            "Reservation completed"
        );
        Ok(outcome)
    }
}
