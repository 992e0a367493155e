//! Core domain types for cinema ticket purchases.
//!
//! All types use smart constructors to ensure validity at construction time,
//! following the "parse, don't validate" principle.

use crate::errors::InvalidPurchase;
use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// An account identifier for the purchaser.
///
/// `AccountId` values are guaranteed to be strictly positive. Raw identifiers
/// are converted during purchase validation, so an invalid id is reported as an
/// [`InvalidPurchase::InvalidAccountId`] rather than failing earlier.
#[nutype(
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Display,
        Into,
        Serialize,
        Deserialize
    )
)]
pub struct AccountId(i64);

/// The category of a cinema ticket.
///
/// The category determines the unit price, whether the ticket occupies a seat,
/// and the accompaniment rules checked during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    /// Adult ticket. At least one is required per purchase.
    Adult,
    /// Child ticket. Occupies a seat.
    Child,
    /// Infant ticket. Sits on an adult's lap and occupies no seat.
    Infant,
}

impl TicketType {
    /// Every ticket type, in pricing order.
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Returns the category key used in ticket requests (`ADULT`, `CHILD`, `INFANT`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }

    /// Whether a ticket of this type is allocated a seat.
    pub const fn occupies_seat(self) -> bool {
        matches!(self, Self::Adult | Self::Child)
    }
}

impl Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = InvalidPurchase;

    /// Parses a category key. Keys are exact, case-sensitive matches.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ticket_type| ticket_type.as_str() == s)
            .ok_or_else(|| InvalidPurchase::UnknownTicketType(s.to_string()))
    }
}
