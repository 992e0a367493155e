//! A box office selling tickets from JSON request documents.

use anyhow::Context;
use cinema_tickets::{parse_requests, PurchaseError, TicketService, TicketingConfig};
use cinema_tickets_memory::{CallJournal, InMemoryPaymentService, InMemorySeatReservationService};
use serde::Serialize;
use std::env::VarError;
use tracing::info;

/// Environment variable naming the JSON configuration file.
pub const CONFIG_VAR: &str = "CINEMA_TICKETS_CONFIG";

/// Loads the configuration named by a lookup of [`CONFIG_VAR`].
///
/// Only an unset variable falls back to the defaults. A value that is not
/// valid unicode is an error, as is an unreadable or invalid file.
pub fn load_config(lookup: Result<String, VarError>) -> anyhow::Result<TicketingConfig> {
    match lookup {
        Ok(path) => {
            info!(%path, "Loading ticketing configuration");
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read configuration file {path}"))?;
            TicketingConfig::from_json_str(&json)
                .with_context(|| format!("invalid configuration in {path}"))
        }
        Err(VarError::NotPresent) => Ok(TicketingConfig::default()),
        Err(error @ VarError::NotUnicode(_)) => {
            Err(error).with_context(|| format!("{CONFIG_VAR} is not a usable path"))
        }
    }
}

/// A scripted sale: an account and the JSON ticket request it submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// Short label used in reports
    pub name: &'static str,
    /// Raw account id, validated by the purchase
    pub account_id: i64,
    /// Ticket request document, see [`parse_requests`]
    pub requests: &'static str,
}

/// Sales run by the example binary.
pub const SCENARIOS: [Scenario; 8] = [
    Scenario {
        name: "family",
        account_id: 1,
        requests: r#"{ "ADULT": 2, "CHILD": 1, "INFANT": 2 }"#,
    },
    Scenario {
        name: "children-only",
        account_id: 1,
        requests: r#"{ "ADULT": 0, "CHILD": 2, "INFANT": 1 }"#,
    },
    Scenario {
        name: "school-trip",
        account_id: 1,
        requests: r#"{ "ADULT": 10, "CHILD": 10, "INFANT": 2 }"#,
    },
    Scenario {
        name: "too-many-infants",
        account_id: 1,
        requests: r#"{ "ADULT": 2, "CHILD": 0, "INFANT": 3 }"#,
    },
    Scenario {
        name: "solo",
        account_id: 1,
        requests: r#"{ "ADULT": 1 }"#,
    },
    Scenario {
        name: "full-row",
        account_id: 1,
        requests: r#"[{ "ADULT": 12 }, { "ADULT": 8 }]"#,
    },
    Scenario {
        name: "anonymous",
        account_id: 0,
        requests: r#"{ "ADULT": 1 }"#,
    },
    Scenario {
        name: "senior",
        account_id: 2,
        requests: r#"{ "SENIOR": 1 }"#,
    },
];

/// The result of one sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaleReport {
    /// Payment and reservation went through.
    Completed {
        /// Scenario label
        scenario: String,
        /// Seats reserved
        total_seats: u32,
        /// Amount charged
        total_amount: u64,
    },
    /// The request was rejected before any payment.
    Rejected {
        /// Scenario label
        scenario: String,
        /// The violated rule
        reason: String,
    },
}

/// A ticket service wired to in-memory payment and reservation services.
#[derive(Debug, Clone)]
pub struct BoxOffice {
    service: TicketService<InMemoryPaymentService, InMemorySeatReservationService>,
    payments: InMemoryPaymentService,
    journal: CallJournal,
}

impl BoxOffice {
    /// Opens a box office with the given configuration.
    pub fn new(config: TicketingConfig) -> Self {
        let journal = CallJournal::new();
        let payments = InMemoryPaymentService::with_journal(journal.clone());
        let reservations = InMemorySeatReservationService::with_journal(journal.clone());
        Self {
            service: TicketService::with_config(payments.clone(), reservations, config),
            payments,
            journal,
        }
    }

    /// Runs one scenario.
    ///
    /// Invalid requests are reported as [`SaleReport::Rejected`]. Failures of
    /// the payment or reservation service are returned as errors.
    pub fn sell(&self, scenario: &Scenario) -> Result<SaleReport, PurchaseError> {
        let result = parse_requests(scenario.requests)
            .map_err(PurchaseError::from)
            .and_then(|requests| self.service.purchase_tickets(scenario.account_id, &requests));

        match result {
            Ok(outcome) => Ok(SaleReport::Completed {
                scenario: scenario.name.to_string(),
                total_seats: outcome.total_seats,
                total_amount: outcome.total_amount,
            }),
            Err(PurchaseError::Invalid(violation)) => Ok(SaleReport::Rejected {
                scenario: scenario.name.to_string(),
                reason: violation.to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    /// Total amount taken across all sales.
    pub fn takings(&self) -> u64 {
        self.payments
            .payments()
            .into_iter()
            .map(|(_, amount)| amount)
            .sum()
    }

    /// Number of payment and reservation calls made so far.
    pub fn external_calls(&self) -> usize {
        self.journal.len()
    }
}
