//! BOM cost rollup tests
//!
//! Tests for single-level rollups including:
//! - Line cost rounding
//! - Unknown component costs counting as zero
//! - Rollup additivity over a parent's edges

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::analytics::{line_cost, total_bom_cost};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Test line cost is quantity times component cost, in cents
    #[test]
    fn test_line_cost() {
        assert_eq!(line_cost(dec("2"), Some(dec("5.00"))), dec("10.00"));
        assert_eq!(line_cost(dec("0.5"), Some(dec("8.00"))), dec("4.00"));
        assert_eq!(line_cost(dec("3"), Some(dec("1.333"))), dec("4.00"));
    }

    /// Test a component without a recorded cost contributes zero
    #[test]
    fn test_unknown_component_cost_is_zero() {
        assert_eq!(line_cost(dec("7"), None), dec("0.00"));
    }

    /// Test the reference scenario: two priced edges and one unpriced
    #[test]
    fn test_rollup_reference_scenario() {
        let lines = [
            line_cost(dec("2"), Some(dec("5.00"))),
            line_cost(dec("1"), Some(dec("12.50"))),
            line_cost(dec("3"), None),
        ];
        assert_eq!(total_bom_cost(lines), dec("22.50"));
    }

    /// Test a parent with no edges rolls up to zero
    #[test]
    fn test_empty_bom_rolls_up_to_zero() {
        assert_eq!(total_bom_cost(std::iter::empty()), Decimal::ZERO);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating edge quantities
    fn quantity_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=10000i64).prop_map(|n| Decimal::new(n, 1))
    }

    /// Strategy for generating optional component costs
    fn cost_strategy() -> impl Strategy<Value = Option<Decimal>> {
        proptest::option::of((0i64..=1000000i64).prop_map(|n| Decimal::new(n, 2)))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Line costs are never negative
        #[test]
        fn prop_line_cost_non_negative(
            qty in quantity_strategy(),
            cost in cost_strategy()
        ) {
            prop_assert!(line_cost(qty, cost) >= Decimal::ZERO);
        }

        /// The rollup equals the sum of its line costs
        #[test]
        fn prop_rollup_is_additive(
            edges in prop::collection::vec((quantity_strategy(), cost_strategy()), 0..20)
        ) {
            let lines: Vec<Decimal> = edges
                .iter()
                .map(|(qty, cost)| line_cost(*qty, *cost))
                .collect();

            let expected: Decimal = lines.iter().copied().sum();
            prop_assert_eq!(total_bom_cost(lines), expected);
        }

        /// Dropping an unpriced edge never changes the rollup
        #[test]
        fn prop_unpriced_edges_contribute_nothing(
            edges in prop::collection::vec((quantity_strategy(), cost_strategy()), 0..20),
            extra_qty in quantity_strategy()
        ) {
            let with_unpriced: Decimal = edges
                .iter()
                .map(|(qty, cost)| line_cost(*qty, *cost))
                .chain(std::iter::once(line_cost(extra_qty, None)))
                .sum();
            let without: Decimal = edges
                .iter()
                .map(|(qty, cost)| line_cost(*qty, *cost))
                .sum();

            prop_assert_eq!(with_unpriced, without);
        }
    }
}
