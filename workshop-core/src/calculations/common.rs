//! Money helpers shared by the order totals.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places of every amount shown to the operator.
const CENTS: u32 = 2;

/// Rounds an amount to cents, halves going away from zero, so a `1.005`
/// clip costs `1.01` and not the `1.00` binary floats would give.
///
/// ```
/// use rust_decimal_macros::dec;
/// use workshop_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1.005)), dec!(1.01));
/// assert_eq!(round_half_up(dec!(22.5) * dec!(3)), dec!(67.50));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CENTS, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as a fixed two-decimal currency string, without a
/// currency symbol.
///
/// ```
/// use rust_decimal_macros::dec;
/// use workshop_core::calculations::common::format_money;
///
/// assert_eq!(format_money(dec!(35)), "35.00");
/// assert_eq!(format_money(dec!(22.5)), "22.50");
/// ```
pub fn format_money(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(CENTS);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn litre_prices_round_to_cents() {
        // 3 litres at 4.335
        assert_eq!(round_half_up(dec!(4.335) * dec!(3)), dec!(13.01));
        // 7 litres at 1.111
        assert_eq!(round_half_up(dec!(1.111) * dec!(7)), dec!(7.78));
    }

    #[test]
    fn half_cent_part_price_rounds_up() {
        assert_eq!(round_half_up(dec!(1.005)), dec!(1.01));
        assert_eq!(round_half_up(dec!(2.675)), dec!(2.68));
    }

    #[test]
    fn whole_amounts_are_unchanged() {
        assert_eq!(round_half_up(dec!(35)), dec!(35));
        assert_eq!(round_half_up(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn format_money_pads_to_cents() {
        assert_eq!(format_money(Decimal::ZERO), "0.00");
        assert_eq!(format_money(dec!(22.5)), "22.50");
        assert_eq!(format_money(dec!(1000000000)), "1000000000.00");
    }

    #[test]
    fn format_money_rounds_sub_cent_amounts() {
        assert_eq!(format_money(dec!(0.125) * dec!(4)), "0.50");
        assert_eq!(format_money(dec!(12.3449)), "12.34");
    }
}
