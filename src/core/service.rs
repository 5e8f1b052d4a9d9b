use crate::core::distribution::calculate_distribution;
use crate::core::price::price;
use crate::domain::model::{DistributionBreakdown, PricingRequest, ServicePrice};
use crate::domain::rates::RateConfiguration;
use crate::utils::error::Result;
use rust_decimal::Decimal;

/// Prices a service and splits the resulting total in one call.
///
/// Any failure from either step is returned as is; nothing is computed past it.
pub fn calculate_service_price(
    rates: &RateConfiguration,
    area: Decimal,
    complexity_level: u8,
    referral_applies: bool,
    apply_discount: bool,
) -> Result<ServicePrice> {
    let pricing = price(
        rates,
        &PricingRequest {
            area,
            complexity_level,
            apply_first_purchase_discount: apply_discount,
        },
    )?;
    let split = calculate_distribution(rates, pricing.total_price, referral_applies)?;

    let referral_fee_percent = if referral_applies {
        rates.referral_fee_percent
    } else {
        Decimal::ZERO
    };

    Ok(ServicePrice {
        pricing,
        distribution: DistributionBreakdown {
            platform_fee_percent: rates.platform_fee_percent,
            platform_fee: split.platform_fee,
            referral_applies,
            referral_fee_percent,
            referral_fee: split.referral_fee,
            professional_amount: split.professional_amount,
            professional_percent: rates.professional_percent(referral_applies),
        },
    })
}
