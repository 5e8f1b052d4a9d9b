use crate::core::money::{percent_of, round2};
use crate::domain::model::{PricingRequest, PricingResult};
use crate::domain::rates::RateConfiguration;
use crate::utils::error::{PricingError, Result};
use rust_decimal::Decimal;

/// Prices one service.
///
/// `base_price = area × rate`, times the complexity multiplier, times
/// `(1 − discount%)` when the first-purchase discount applies, rounded to
/// cents at the end. Fails on a non-positive area or an unknown level.
pub fn price(rates: &RateConfiguration, request: &PricingRequest) -> Result<PricingResult> {
    if request.area <= Decimal::ZERO {
        return Err(PricingError::invalid_argument(
            "area must be greater than zero",
        ));
    }

    let multiplier = rates
        .complexity_multipliers
        .get(request.complexity_level)
        .ok_or_else(|| PricingError::invalid_argument("invalid complexity level"))?;

    let base_price = request
        .area
        .checked_mul(rates.base_rate_per_area)
        .ok_or_else(|| PricingError::invalid_argument("area is too large"))?;
    let with_complexity = base_price
        .checked_mul(multiplier)
        .ok_or_else(|| PricingError::invalid_argument("area is too large"))?;

    let discount_percent = rates.first_purchase_discount_percent;
    let (discount_amount, discounted) = if request.apply_first_purchase_discount {
        let factor = Decimal::ONE - discount_percent / Decimal::ONE_HUNDRED;
        let discount_amount = percent_of(with_complexity, discount_percent)
            .ok_or_else(|| PricingError::invalid_argument("area is too large"))?;
        let discounted = with_complexity
            .checked_mul(factor)
            .ok_or_else(|| PricingError::invalid_argument("area is too large"))?;
        (round2(discount_amount), discounted)
    } else {
        (Decimal::ZERO, with_complexity)
    };

    let total_price = round2(discounted);

    tracing::debug!(
        area = %request.area,
        complexity_level = request.complexity_level,
        discount = request.apply_first_purchase_discount,
        total_price = %total_price,
        "Priced service"
    );

    Ok(PricingResult {
        area: request.area,
        base_rate_per_area: rates.base_rate_per_area,
        complexity_level: request.complexity_level,
        complexity_multiplier: multiplier,
        base_price,
        discount_applied: request.apply_first_purchase_discount,
        discount_percent,
        discount_amount,
        total_price,
    })
}

/// Total price only, see [`price`].
pub fn calculate_total_price(
    rates: &RateConfiguration,
    area: Decimal,
    complexity_level: u8,
    apply_discount: bool,
) -> Result<Decimal> {
    let request = PricingRequest {
        area,
        complexity_level,
        apply_first_purchase_discount: apply_discount,
    };
    price(rates, &request).map(|result| result.total_price)
}
