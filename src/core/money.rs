use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary values carry two decimal places (cents).
pub const DECIMAL_PLACES: u32 = 2;

/// Rounds to cents, half-up.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `percent`% of `amount`, unrounded. `None` when the product overflows.
pub fn percent_of(amount: Decimal, percent: Decimal) -> Option<Decimal> {
    amount
        .checked_mul(percent)
        .map(|scaled| scaled / Decimal::ONE_HUNDRED)
}
