//! Box office example application
//!
//! This example sells a scripted list of ticket requests and prints one JSON
//! report per sale. Set `CINEMA_TICKETS_CONFIG` to the path of a JSON
//! configuration file to change prices or the ticket limit, and `RUST_LOG` to
//! change the log level.

use anyhow::Result;
use cinema_tickets_examples::box_office::{load_config, BoxOffice, CONFIG_VAR, SCENARIOS};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(std::env::var(CONFIG_VAR))?;
    info!(
        max_tickets = config.max_tickets(),
        adult = config.prices.adult,
        child = config.prices.child,
        infant = config.prices.infant,
        "Opening box office"
    );

    let box_office = BoxOffice::new(config);
    for scenario in &SCENARIOS {
        let report = box_office.sell(scenario)?;
        println!("{}", serde_json::to_string(&report)?);
    }

    info!(
        takings = box_office.takings(),
        external_calls = box_office.external_calls(),
        "Box office closed"
    );

    Ok(())
}
