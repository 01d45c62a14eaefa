//! Reorder alert tests
//!
//! Tests for alert triggering including:
//! - Strict below-threshold inequality
//! - Unconfigured reorder points never alerting
//! - Shortfall and suggested order quantity derivation

use proptest::prelude::*;
use rust_decimal::Decimal;

use shared::analytics::{should_alert, shortfall_quantity, suggested_order_quantity};

// Helper to create Decimal from an integer
fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Test the reference scenario: 5 on hand against a reorder point of 10
    #[test]
    fn test_alert_reference_scenario() {
        assert!(should_alert(dec(5), Some(dec(10))));

        let shortfall = shortfall_quantity(dec(10), dec(5));
        assert_eq!(shortfall, dec(5));
        assert_eq!(suggested_order_quantity(shortfall, dec(50), dec(0)), dec(50));
    }

    /// Test equality at the reorder point does not alert
    #[test]
    fn test_at_reorder_point_no_alert() {
        assert!(!should_alert(dec(10), Some(dec(10))));
    }

    /// Test products without a usable reorder point never alert
    #[test]
    fn test_unconfigured_point_never_alerts() {
        assert!(!should_alert(dec(0), None));
        assert!(!should_alert(dec(0), Some(Decimal::ZERO)));
        assert!(!should_alert(dec(-3), Some(dec(-10))));
    }

    /// Test negative on-hand quantities still alert against a positive point
    #[test]
    fn test_negative_on_hand_alerts() {
        assert!(should_alert(dec(-2), Some(dec(10))));
        assert_eq!(shortfall_quantity(dec(10), dec(-2)), dec(12));
    }

    /// Test inbound stock reduces the suggestion but never below shortfall
    #[test]
    fn test_inbound_stock_caps_suggestion() {
        let shortfall = shortfall_quantity(dec(10), dec(5));

        // 20 inbound of a configured 50 leaves 30 to order
        assert_eq!(suggested_order_quantity(shortfall, dec(50), dec(20)), dec(30));
        // Heavy inbound clamps to the shortfall
        assert_eq!(suggested_order_quantity(shortfall, dec(50), dec(48)), dec(5));
        assert_eq!(suggested_order_quantity(shortfall, dec(50), dec(100)), dec(5));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating quantities
    fn quantity_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=10000i64).prop_map(Decimal::from)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Alerting is exactly the strict-below comparison for positive points
        #[test]
        fn prop_alert_is_strict_comparison(
            on_hand in quantity_strategy(),
            point in 1i64..=10000
        ) {
            let point = Decimal::from(point);
            prop_assert_eq!(should_alert(on_hand, Some(point)), on_hand < point);
        }

        /// No alert is ever raised without a positive reorder point
        #[test]
        fn prop_no_alert_without_point(
            on_hand in quantity_strategy(),
            bad_point in proptest::option::of(-10000i64..=0)
        ) {
            let point = bad_point.map(Decimal::from);
            prop_assert!(!should_alert(on_hand, point));
        }

        /// Shortfall is non-negative and zero exactly when stock covers the
        /// point
        #[test]
        fn prop_shortfall_non_negative(
            point in quantity_strategy(),
            on_hand in quantity_strategy()
        ) {
            let shortfall = shortfall_quantity(point, on_hand);

            prop_assert!(shortfall >= Decimal::ZERO);
            prop_assert_eq!(shortfall == Decimal::ZERO, on_hand >= point);
        }

        /// The suggestion always covers the shortfall
        #[test]
        fn prop_suggestion_covers_shortfall(
            point in quantity_strategy(),
            on_hand in quantity_strategy(),
            reorder_qty in quantity_strategy(),
            inbound in quantity_strategy()
        ) {
            let shortfall = shortfall_quantity(point, on_hand);
            let suggested = suggested_order_quantity(shortfall, reorder_qty, inbound);

            prop_assert!(suggested >= shortfall);
        }

        /// With nothing inbound, the suggestion is at least the configured
        /// reorder quantity
        #[test]
        fn prop_suggestion_honors_configured_quantity(
            point in quantity_strategy(),
            on_hand in quantity_strategy(),
            reorder_qty in quantity_strategy()
        ) {
            let shortfall = shortfall_quantity(point, on_hand);
            let suggested = suggested_order_quantity(shortfall, reorder_qty, Decimal::ZERO);

            prop_assert!(suggested >= reorder_qty);
        }
    }
}
