//! Testing utilities for cinema ticket purchases.
//!
//! Enabled with the `testing` feature.
//!
//! - [`generators`]: Property test generators for requests and orders
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use cinema_tickets::testing::prelude::*;
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn valid_purchases_reserve_seats(requests in arb_valid_requests()) {
//!         // ...
//!     }
//! }
//! ```

pub mod generators;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use cinema_tickets::testing::prelude::*;
/// ```
pub mod prelude {
    pub use super::generators::*;
}
