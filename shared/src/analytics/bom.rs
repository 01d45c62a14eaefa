//! BOM cost rollup rules

use rust_decimal::Decimal;

/// Cost of one BOM edge: round(quantity * child_cost, 2).
///
/// An unknown child cost counts as zero, so the rollup undercounts rather
/// than failing when a component has no vendor cost on record.
pub fn line_cost(quantity: Decimal, child_cost: Option<Decimal>) -> Decimal {
    (quantity * child_cost.unwrap_or(Decimal::ZERO)).round_dp(2)
}

/// Sum of line costs for a parent's edges
pub fn total_bom_cost<I: IntoIterator<Item = Decimal>>(line_costs: I) -> Decimal {
    line_costs.into_iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_line_cost_rounds_to_cents() {
        assert_eq!(line_cost(dec("2"), Some(dec("5.00"))), dec("10.00"));
        assert_eq!(line_cost(dec("3"), Some(dec("1.333"))), dec("4.00"));
    }

    #[test]
    fn test_unknown_cost_counts_as_zero() {
        assert_eq!(line_cost(dec("3"), None), dec("0.00"));
    }

    #[test]
    fn test_rollup_is_additive() {
        // two edges: 2 x 5.00 and 3 x unknown
        let lines = [line_cost(dec("2"), Some(dec("5.00"))), line_cost(dec("3"), None)];
        assert_eq!(total_bom_cost(lines), dec("10.00"));
    }
}
