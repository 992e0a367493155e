//! Aggregation of ticket requests and the values derived from it.

use crate::config::TicketPrices;
use crate::request::TicketTypeRequest;
use crate::types::{AccountId, TicketType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Total requested tickets per category for one purchase attempt.
///
/// Categories absent from the input read as zero. A zero count and an absent
/// category are indistinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedOrder {
    counts: BTreeMap<TicketType, u32>,
}

impl AggregatedOrder {
    /// Sums the requests per category, in input order.
    ///
    /// Totals saturate at `u32::MAX`, which is always above the ticket limit.
    pub fn from_requests<'a, I>(requests: I) -> Self
    where
        I: IntoIterator<Item = &'a TicketTypeRequest>,
    {
        let mut counts = BTreeMap::new();
        for request in requests {
            let total = counts.entry(request.ticket_type()).or_insert(0_u32);
            *total = total.saturating_add(request.no_of_tickets());
        }
        Self { counts }
    }

    /// Returns the number of tickets requested for a category.
    pub fn count(&self, ticket_type: TicketType) -> u32 {
        self.counts.get(&ticket_type).copied().unwrap_or(0)
    }

    /// Returns the number of tickets requested across all categories.
    pub fn total_tickets(&self) -> u64 {
        TicketType::ALL
            .into_iter()
            .map(|ticket_type| u64::from(self.count(ticket_type)))
            .sum()
    }

    /// Returns the number of seats to reserve. Infants are not allocated seats.
    pub fn total_seats(&self) -> u32 {
        TicketType::ALL
            .into_iter()
            .filter(|ticket_type| ticket_type.occupies_seat())
            .fold(0_u32, |seats, ticket_type| {
                seats.saturating_add(self.count(ticket_type))
            })
    }

    /// Returns the amount to pay under the given price table, or `None` if it
    /// does not fit in a `u64`.
    pub fn total_amount(&self, prices: &TicketPrices) -> Option<u64> {
        TicketType::ALL
            .into_iter()
            .try_fold(0_u64, |amount, ticket_type| {
                u64::from(self.count(ticket_type))
                    .checked_mul(prices.price_of(ticket_type))
                    .and_then(|line| amount.checked_add(line))
            })
    }

    /// Derives the seat count and amount together.
    ///
    /// Returns `None` when the amount overflows.
    pub fn totals(&self, prices: &TicketPrices) -> Option<OrderTotals> {
        Some(OrderTotals {
            total_seats: self.total_seats(),
            total_amount: self.total_amount(prices)?,
        })
    }
}

/// Values derived from an [`AggregatedOrder`] before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderTotals {
    /// Seats to reserve (adults and children)
    pub total_seats: u32,
    /// Amount to charge
    pub total_amount: u64,
}

/// The result of a completed purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    /// Account that was charged
    pub account_id: AccountId,
    /// Seats reserved
    pub total_seats: u32,
    /// Amount charged
    pub total_amount: u64,
}

impl PurchaseOutcome {
    pub(crate) const fn new(account_id: AccountId, totals: OrderTotals) -> Self {
        Self {
            account_id,
            total_seats: totals.total_seats,
            total_amount: totals.total_amount,
        }
    }
}

impl Display for PurchaseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Reservation completed with {} seat(s), total amount paid {}",
            self.total_seats, self.total_amount
        )
    }
}
