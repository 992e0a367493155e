//! Ticket requests and their construction from raw input.
//!
//! A [`TicketTypeRequest`] is a validated (category, count) pair. Negative
//! counts are rejected here, at construction, so they never reach aggregation
//! or the purchase rules.

use crate::errors::InvalidPurchase;
use crate::types::TicketType;
use serde_json::{Map, Value};

/// A request for a number of tickets of one category.
///
/// Immutable once constructed. The count is always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: u32,
}

impl TicketTypeRequest {
    /// Creates a ticket request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `no_of_tickets` is negative
    /// - `no_of_tickets` exceeds the ticket count range
    pub fn new(ticket_type: TicketType, no_of_tickets: i64) -> Result<Self, InvalidPurchase> {
        if no_of_tickets < 0 {
            return Err(InvalidPurchase::NegativeTicketCount {
                ticket_type,
                count: no_of_tickets,
            });
        }

        Self::from_unsigned(ticket_type, no_of_tickets.unsigned_abs())
    }

    fn from_unsigned(
        ticket_type: TicketType,
        no_of_tickets: u64,
    ) -> Result<Self, InvalidPurchase> {
        let no_of_tickets =
            u32::try_from(no_of_tickets).map_err(|_| InvalidPurchase::TicketCountOutOfRange {
                ticket_type,
                count: no_of_tickets,
            })?;

        Ok(Self {
            ticket_type,
            no_of_tickets,
        })
    }

    /// Creates a ticket request from a category key such as `"ADULT"`.
    ///
    /// Keys are exact, case-sensitive matches. Unknown keys are rejected
    /// instead of ignored.
    pub fn parse(key: &str, no_of_tickets: i64) -> Result<Self, InvalidPurchase> {
        Self::new(key.parse()?, no_of_tickets)
    }

    /// The requested ticket category.
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// The requested number of tickets.
    pub const fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }
}

/// Parses ticket requests from a JSON document.
///
/// The document is either a single object mapping category keys to counts,
/// or an array of such objects. Every key becomes one request. Repeated
/// categories are kept as separate requests and summed during aggregation.
///
/// # Example
///
/// ```
/// use cinema_tickets::{parse_requests, TicketType};
///
/// let requests = parse_requests(r#"[{ "ADULT": 2 }, { "CHILD": 1, "INFANT": 1 }]"#).unwrap();
///
/// assert_eq!(requests.len(), 3);
/// assert_eq!(requests[0].ticket_type(), TicketType::Adult);
/// assert_eq!(requests[0].no_of_tickets(), 2);
/// ```
pub fn parse_requests(json: &str) -> Result<Vec<TicketTypeRequest>, InvalidPurchase> {
    let document: Value = serde_json::from_str(json)
        .map_err(|error| InvalidPurchase::MalformedRequest(error.to_string()))?;

    match document {
        Value::Object(entries) => requests_from_object(&entries),
        Value::Array(items) => {
            let mut requests = Vec::new();
            for item in &items {
                let Value::Object(entries) = item else {
                    return Err(InvalidPurchase::MalformedRequest(format!(
                        "expected an object of ticket counts, got {item}"
                    )));
                };
                requests.extend(requests_from_object(entries)?);
            }
            Ok(requests)
        }
        other => Err(InvalidPurchase::MalformedRequest(format!(
            "expected an object or array of ticket counts, got {other}"
        ))),
    }
}

fn requests_from_object(
    entries: &Map<String, Value>,
) -> Result<Vec<TicketTypeRequest>, InvalidPurchase> {
    entries
        .iter()
        .map(|(key, value)| {
            let ticket_type: TicketType = key.parse()?;
            if let Some(count) = value.as_i64() {
                return TicketTypeRequest::new(ticket_type, count);
            }
            // Whole numbers above i64::MAX are counts, just out of range.
            value.as_u64().map_or_else(
                || {
                    Err(InvalidPurchase::MalformedRequest(format!(
                        "count for {ticket_type} must be an integer, got {value}"
                    )))
                },
                |count| TicketTypeRequest::from_unsigned(ticket_type, count),
            )
        })
        .collect()
}
