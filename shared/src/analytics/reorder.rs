//! Reorder alert rules

use rust_decimal::Decimal;

/// A product alerts iff its current quantity is strictly below a configured,
/// positive reorder point. Products with no reorder point never alert.
pub fn should_alert(current_quantity: Decimal, reorder_point: Option<Decimal>) -> bool {
    match reorder_point {
        Some(point) if point > Decimal::ZERO => current_quantity < point,
        _ => false,
    }
}

/// max(0, reorder_point - quantity_on_hand)
pub fn shortfall_quantity(reorder_point: Decimal, quantity_on_hand: Decimal) -> Decimal {
    (reorder_point - quantity_on_hand).max(Decimal::ZERO)
}

/// Suggested replenishment for a location alert.
///
/// Starts from the configured reorder quantity net of stock already inbound
/// (on order plus in transit), but never suggests less than the shortfall.
pub fn suggested_order_quantity(
    shortfall: Decimal,
    reorder_quantity: Decimal,
    inbound_quantity: Decimal,
) -> Decimal {
    shortfall.max(reorder_quantity - inbound_quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn test_alert_requires_strict_inequality() {
        assert!(should_alert(dec(5), Some(dec(10))));
        assert!(!should_alert(dec(10), Some(dec(10))));
        assert!(!should_alert(dec(11), Some(dec(10))));
    }

    #[test]
    fn test_unconfigured_reorder_point_never_alerts() {
        assert!(!should_alert(dec(0), None));
        assert!(!should_alert(dec(0), Some(Decimal::ZERO)));
        assert!(!should_alert(dec(-1), Some(dec(-5))));
    }

    #[test]
    fn test_shortfall_is_non_negative() {
        assert_eq!(shortfall_quantity(dec(10), dec(3)), dec(7));
        assert_eq!(shortfall_quantity(dec(10), dec(15)), Decimal::ZERO);
    }

    #[test]
    fn test_suggestion_uses_configured_quantity() {
        // shortfall 5, configured 50, nothing inbound
        let shortfall = shortfall_quantity(dec(10), dec(5));
        assert_eq!(suggested_order_quantity(shortfall, dec(50), dec(0)), dec(50));
    }

    #[test]
    fn test_suggestion_never_below_shortfall() {
        // 48 already inbound leaves only 2 of the configured 50, but the
        // shortfall of 5 still wins
        let shortfall = shortfall_quantity(dec(10), dec(5));
        assert_eq!(suggested_order_quantity(shortfall, dec(50), dec(48)), dec(5));
        // fully covered inbound clamps to the shortfall, not below zero
        assert_eq!(suggested_order_quantity(shortfall, dec(50), dec(60)), dec(5));
    }
}
