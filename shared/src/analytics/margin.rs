//! Margin derivation rules

use rust_decimal::Decimal;

/// Margin in currency units, 2 decimal places.
///
/// None unless a strictly positive cost is known; products without a price
/// never reach this rule (they are excluded upstream).
pub fn margin_amount(price: Decimal, cost: Option<Decimal>) -> Option<Decimal> {
    match cost {
        Some(c) if c > Decimal::ZERO => Some((price - c).round_dp(2)),
        _ => None,
    }
}

/// Margin as a percentage of cost, 1 decimal place.
///
/// Guarded on strictly positive cost so the division is always defined.
pub fn margin_percent(price: Decimal, cost: Option<Decimal>) -> Option<Decimal> {
    match cost {
        Some(c) if c > Decimal::ZERO => {
            Some(((price - c) / c * Decimal::from(100)).round_dp(1))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_margin_amount_and_percent() {
        let price = dec("100.00");
        let cost = Some(dec("40.00"));
        assert_eq!(margin_amount(price, cost), Some(dec("60.00")));
        assert_eq!(margin_percent(price, cost), Some(dec("150.0")));
    }

    #[test]
    fn test_negative_margin_is_reported() {
        assert_eq!(
            margin_amount(dec("10.00"), Some(dec("12.50"))),
            Some(dec("-2.50"))
        );
        assert_eq!(
            margin_percent(dec("10.00"), Some(dec("12.50"))),
            Some(dec("-20.0"))
        );
    }

    #[test]
    fn test_unknown_cost_yields_null_margin() {
        assert_eq!(margin_amount(dec("100.00"), None), None);
        assert_eq!(margin_percent(dec("100.00"), None), None);
    }

    #[test]
    fn test_non_positive_cost_yields_null_margin() {
        assert_eq!(margin_amount(dec("100.00"), Some(Decimal::ZERO)), None);
        assert_eq!(margin_percent(dec("100.00"), Some(Decimal::ZERO)), None);
        assert_eq!(margin_percent(dec("100.00"), Some(dec("-1.00"))), None);
    }

    #[test]
    fn test_rounding_precision() {
        // 1/3 margins round to the documented places
        assert_eq!(
            margin_amount(dec("10.005"), Some(dec("3.00"))),
            Some(dec("7.00"))
        );
        assert_eq!(
            margin_percent(dec("4.00"), Some(dec("3.00"))),
            Some(dec("33.3"))
        );
    }
}
