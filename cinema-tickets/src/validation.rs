//! Business rules for ticket purchases.
//!
//! Rules are checked in a fixed order and the first violation is returned:
//!
//! 1. the account id is strictly positive
//! 2. at least one adult ticket is requested
//! 3. the total number of tickets is within the configured maximum
//! 4. there are no more infants than adults
//! 5. the amount to pay fits in a `u64` and is non-zero
//! 6. the number of seats is non-zero

use crate::config::TicketingConfig;
use crate::errors::InvalidPurchase;
use crate::order::{AggregatedOrder, OrderTotals};
use crate::types::{AccountId, TicketType};

/// Checks a purchase attempt against every business rule.
///
/// Returns the validated [`AccountId`] and the seat and amount totals priced
/// under `config`.
pub fn validate_purchase(
    account_id: i64,
    order: &AggregatedOrder,
    config: &TicketingConfig,
) -> Result<(AccountId, OrderTotals), InvalidPurchase> {
    let account_id = valid_account(account_id)?;
    adult_present(order)?;
    within_ticket_limit(order, config.max_tickets())?;
    infants_accompanied(order)?;
    let totals = order
        .totals(&config.prices)
        .ok_or(InvalidPurchase::AmountOverflow)?;
    amount_non_zero(&totals)?;
    seats_non_zero(&totals)?;
    Ok((account_id, totals))
}

fn valid_account(account_id: i64) -> Result<AccountId, InvalidPurchase> {
    AccountId::try_new(account_id).map_err(|_| InvalidPurchase::InvalidAccountId(account_id))
}

fn adult_present(order: &AggregatedOrder) -> Result<(), InvalidPurchase> {
    if order.count(TicketType::Adult) == 0 {
        return Err(InvalidPurchase::AdultTicketRequired);
    }
    Ok(())
}

fn within_ticket_limit(order: &AggregatedOrder, max: u32) -> Result<(), InvalidPurchase> {
    let requested = order.total_tickets();
    if requested > u64::from(max) {
        return Err(InvalidPurchase::TooManyTickets { requested, max });
    }
    Ok(())
}

// Infants sit on an adult's lap, one per adult.
fn infants_accompanied(order: &AggregatedOrder) -> Result<(), InvalidPurchase> {
    let adults = order.count(TicketType::Adult);
    let infants = order.count(TicketType::Infant);
    if infants > adults {
        return Err(InvalidPurchase::UnaccompaniedInfants { infants, adults });
    }
    Ok(())
}

const fn amount_non_zero(totals: &OrderTotals) -> Result<(), InvalidPurchase> {
    if totals.total_amount == 0 {
        return Err(InvalidPurchase::AmountCalculation);
    }
    Ok(())
}

const fn seats_non_zero(totals: &OrderTotals) -> Result<(), InvalidPurchase> {
    if totals.total_seats == 0 {
        return Err(InvalidPurchase::SeatCalculation);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TicketPrices;
    use crate::request::TicketTypeRequest;
    use proptest::prelude::*;

    fn order(adults: i64, children: i64, infants: i64) -> AggregatedOrder {
        AggregatedOrder::from_requests(&[
            TicketTypeRequest::new(TicketType::Adult, adults).unwrap(),
            TicketTypeRequest::new(TicketType::Child, children).unwrap(),
            TicketTypeRequest::new(TicketType::Infant, infants).unwrap(),
        ])
    }

    fn check(account_id: i64, order: &AggregatedOrder) -> Result<AccountId, InvalidPurchase> {
        check_with(account_id, order, &TicketingConfig::default())
    }

    fn check_with(
        account_id: i64,
        order: &AggregatedOrder,
        config: &TicketingConfig,
    ) -> Result<AccountId, InvalidPurchase> {
        validate_purchase(account_id, order, config).map(|(account_id, _)| account_id)
    }

    #[test]
    fn valid_purchase_returns_account_and_totals() {
        let (account_id, totals) =
            validate_purchase(1, &order(2, 1, 2), &TicketingConfig::default()).unwrap();
        assert_eq!(account_id.into_inner(), 1);
        assert_eq!(
            totals,
            OrderTotals {
                total_seats: 3,
                total_amount: 50
            }
        );
    }

    #[test]
    fn account_is_checked_before_every_other_rule() {
        assert_eq!(
            check(0, &order(0, 0, 5)),
            Err(InvalidPurchase::InvalidAccountId(0))
        );
    }

    #[test]
    fn adult_rule_is_checked_before_ticket_limit() {
        assert_eq!(
            check(1, &order(0, 25, 0)),
            Err(InvalidPurchase::AdultTicketRequired)
        );
    }

    #[test]
    fn ticket_limit_is_checked_before_infant_rule() {
        assert_eq!(
            check(1, &order(5, 0, 16)),
            Err(InvalidPurchase::TooManyTickets {
                requested: 21,
                max: 20
            })
        );
    }

    #[test]
    fn exactly_twenty_tickets_is_allowed() {
        assert!(check(1, &order(10, 5, 5)).is_ok());
        assert!(check(1, &order(20, 0, 0)).is_ok());
    }

    #[test]
    fn more_infants_than_adults_is_rejected() {
        assert_eq!(
            check(1, &order(2, 0, 3)),
            Err(InvalidPurchase::UnaccompaniedInfants {
                infants: 3,
                adults: 2
            })
        );
    }

    #[test]
    fn one_infant_per_adult_is_allowed() {
        assert!(check(1, &order(10, 0, 10)).is_ok());
    }

    #[test]
    fn zero_amount_is_rejected_when_adults_are_free() {
        let config = TicketingConfig {
            prices: TicketPrices {
                adult: 0,
                child: 0,
                infant: 0,
            },
            ..TicketingConfig::default()
        };
        assert_eq!(
            check_with(1, &order(1, 0, 0), &config),
            Err(InvalidPurchase::AmountCalculation)
        );
    }

    #[test]
    fn overflowing_amount_is_rejected() {
        let config = TicketingConfig {
            prices: TicketPrices {
                adult: 10_000_000_000_000_000_000,
                ..TicketPrices::default()
            },
            ..TicketingConfig::default()
        };
        assert_eq!(
            check_with(1, &order(2, 0, 0), &config),
            Err(InvalidPurchase::AmountOverflow)
        );
    }

    #[test]
    fn overflowing_amount_does_not_mask_earlier_rules() {
        let config = TicketingConfig {
            prices: TicketPrices {
                adult: u64::MAX,
                child: u64::MAX,
                infant: 0,
            },
            ..TicketingConfig::default()
        };
        assert_eq!(
            check_with(0, &order(2, 2, 0), &config),
            Err(InvalidPurchase::InvalidAccountId(0))
        );
        assert_eq!(
            check_with(1, &order(2, 0, 3), &config),
            Err(InvalidPurchase::UnaccompaniedInfants {
                infants: 3,
                adults: 2
            })
        );
    }

    #[test]
    fn zero_seats_are_rejected() {
        let totals = OrderTotals {
            total_seats: 0,
            total_amount: 20,
        };
        assert_eq!(
            seats_non_zero(&totals),
            Err(InvalidPurchase::SeatCalculation)
        );
    }

    proptest! {
        #[test]
        fn non_positive_accounts_are_always_rejected(
            account_id in i64::MIN..=0i64,
            adults in 0i64..30,
            children in 0i64..30,
            infants in 0i64..30
        ) {
            prop_assert_eq!(
                check(account_id, &order(adults, children, infants)),
                Err(InvalidPurchase::InvalidAccountId(account_id))
            );
        }

        #[test]
        fn missing_adults_are_always_rejected(children in 0i64..30, infants in 0i64..30) {
            prop_assert_eq!(
                check(1, &order(0, children, infants)),
                Err(InvalidPurchase::AdultTicketRequired)
            );
        }

        #[test]
        fn oversized_orders_are_always_rejected(
            adults in 1i64..=20,
            children in 0i64..=20,
            infants in 0i64..=20
        ) {
            prop_assume!(adults + children + infants > 20);
            let is_too_many = matches!(
                check(1, &order(adults, children, infants)),
                Err(InvalidPurchase::TooManyTickets { .. })
            );
            prop_assert!(is_too_many);
        }

        #[test]
        fn unaccompanied_infants_are_always_rejected(adults in 1i64..8, extra in 1i64..4) {
            let is_unaccompanied = matches!(
                check(1, &order(adults, 0, adults + extra)),
                Err(InvalidPurchase::UnaccompaniedInfants { .. })
            );
            prop_assert!(is_unaccompanied);
        }
    }
}
