//! Pricing and limit configuration for ticket purchases.
//!
//! The configuration is immutable once a [`TicketService`](crate::TicketService)
//! is constructed. [`TicketingConfig::default`] carries the standard price
//! table and the 20-ticket limit.

use crate::errors::ConfigError;
use crate::types::TicketType;
use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Unit price per ticket category, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketPrices {
    /// Price of an adult ticket (default: 20)
    pub adult: u64,
    /// Price of a child ticket (default: 10)
    pub child: u64,
    /// Price of an infant ticket (default: 0)
    pub infant: u64,
}

impl TicketPrices {
    /// Returns the unit price for a ticket category.
    pub const fn price_of(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }
}

impl Default for TicketPrices {
    fn default() -> Self {
        Self {
            adult: 20,
            child: 10,
            infant: 0,
        }
    }
}

/// Maximum number of tickets, across all categories, in one purchase.
///
/// Always at least 1.
#[nutype(
    validate(greater = 0),
    default = 20,
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
        Default,
        Serialize,
        Deserialize
    )
)]
pub struct MaxTicketsPerPurchase(u32);

/// Configuration for ticket purchases.
///
/// # Example
///
/// ```
/// use cinema_tickets::TicketingConfig;
///
/// let config = TicketingConfig::from_json_str(
///     r#"{ "prices": { "adult": 25 }, "max_tickets_per_purchase": 10 }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.prices.adult, 25);
/// assert_eq!(config.prices.child, 10);
/// assert_eq!(config.max_tickets_per_purchase.into_inner(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketingConfig {
    /// Unit price per ticket category
    pub prices: TicketPrices,
    /// Maximum tickets per purchase (default: 20)
    pub max_tickets_per_purchase: MaxTicketsPerPurchase,
}

impl TicketingConfig {
    /// Loads a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults. A maximum of zero tickets
    /// is rejected.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the unit price for a ticket category.
    pub const fn price_of(&self, ticket_type: TicketType) -> u64 {
        self.prices.price_of(ticket_type)
    }

    /// Returns the maximum number of tickets per purchase.
    pub fn max_tickets(&self) -> u32 {
        self.max_tickets_per_purchase.into_inner()
    }
}
