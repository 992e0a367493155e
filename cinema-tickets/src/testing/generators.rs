//! Property test generators for ticket purchases.
//!
//! Each generator respects the construction rules of the type it produces, so
//! generated requests never carry negative counts.

use crate::config::MaxTicketsPerPurchase;
use crate::request::TicketTypeRequest;
use crate::types::TicketType;
use proptest::prelude::*;

/// The ticket limit of the default configuration.
fn default_max_tickets() -> u32 {
    MaxTicketsPerPurchase::default().into_inner()
}

/// Generates any ticket category.
pub fn arb_ticket_type() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Adult),
        Just(TicketType::Child),
        Just(TicketType::Infant),
    ]
}

/// Generates a ticket request with a count in `counts`.
pub fn arb_ticket_request(
    counts: std::ops::RangeInclusive<u32>,
) -> impl Strategy<Value = TicketTypeRequest> {
    (arb_ticket_type(), counts).prop_filter_map(
        "Invalid TicketTypeRequest",
        |(ticket_type, count)| TicketTypeRequest::new(ticket_type, i64::from(count)).ok(),
    )
}

/// Generates an arbitrary sequence of small ticket requests, valid or not.
///
/// Categories may repeat.
pub fn arb_ticket_requests() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    prop::collection::vec(arb_ticket_request(0..=12), 0..8)
}

/// Generates `(adults, children, infants)` that pass every purchase rule under
/// the default configuration.
pub fn arb_valid_counts() -> impl Strategy<Value = (u32, u32, u32)> {
    let max_tickets = default_max_tickets();
    (1..=max_tickets).prop_flat_map(move |adults| {
        let remaining = max_tickets - adults;
        (0..=remaining).prop_flat_map(move |children| {
            let infant_cap = adults.min(remaining - children);
            (Just(adults), Just(children), 0..=infant_cap)
        })
    })
}

/// Generates requests that pass every purchase rule under the default
/// configuration, one request per category.
pub fn arb_valid_requests() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    arb_valid_counts().prop_filter_map("Invalid TicketTypeRequest", |(adults, children, infants)| {
        [
            (TicketType::Adult, adults),
            (TicketType::Child, children),
            (TicketType::Infant, infants),
        ]
        .into_iter()
        .map(|(ticket_type, count)| TicketTypeRequest::new(ticket_type, i64::from(count)).ok())
        .collect::<Option<Vec<_>>>()
    })
}
