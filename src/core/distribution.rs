use crate::core::money::{percent_of, round2};
use crate::domain::model::{DistributionRequest, DistributionResult};
use crate::domain::rates::RateConfiguration;
use crate::utils::error::{PricingError, Result};
use rust_decimal::Decimal;

/// Splits a total between platform, referrer and professional.
///
/// Both fees are rounded to cents before the professional amount is taken as
/// the remainder, so the three parts always add up to the rounded total.
pub fn distribute(
    rates: &RateConfiguration,
    request: &DistributionRequest,
) -> Result<DistributionResult> {
    let total = request.total_price;
    if total <= Decimal::ZERO {
        return Err(PricingError::invalid_argument(
            "total price must be greater than zero",
        ));
    }

    let too_large = || PricingError::invalid_argument("total price is too large");

    let platform_fee =
        round2(percent_of(total, rates.platform_fee_percent).ok_or_else(too_large)?);
    let referral_fee = if request.referral_applies {
        round2(percent_of(total, rates.referral_fee_percent).ok_or_else(too_large)?)
    } else {
        Decimal::ZERO
    };
    let remainder = total
        .checked_sub(platform_fee)
        .and_then(|rest| rest.checked_sub(referral_fee))
        .ok_or_else(too_large)?;
    let professional_amount = round2(remainder);

    tracing::debug!(
        total_price = %total,
        platform_fee = %platform_fee,
        referral_fee = %referral_fee,
        professional_amount = %professional_amount,
        "Distributed payment"
    );

    Ok(DistributionResult {
        total_price: round2(total),
        platform_fee,
        referral_fee,
        professional_amount,
    })
}

pub fn calculate_distribution(
    rates: &RateConfiguration,
    total_price: Decimal,
    referral_applies: bool,
) -> Result<DistributionResult> {
    distribute(
        rates,
        &DistributionRequest {
            total_price,
            referral_applies,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rates() -> RateConfiguration {
        RateConfiguration::default()
    }

    #[test]
    fn test_distribution_without_referral() {
        let result = calculate_distribution(&rates(), dec!(150), false).unwrap();
        assert_eq!(result.total_price, dec!(150));
        assert_eq!(result.platform_fee, dec!(15));
        assert_eq!(result.referral_fee, dec!(0));
        assert_eq!(result.professional_amount, dec!(135));
    }

    #[test]
    fn test_distribution_with_referral() {
        let result = calculate_distribution(&rates(), dec!(150), true).unwrap();
        assert_eq!(result.platform_fee, dec!(15));
        assert_eq!(result.referral_fee, dec!(7.5));
        assert_eq!(result.professional_amount, dec!(127.5));
    }

    #[test]
    fn test_fees_round_before_subtraction() {
        // 10% of 0.15 = 0.015 -> 0.02, 5% = 0.0075 -> 0.01, remainder 0.12
        let result = calculate_distribution(&rates(), dec!(0.15), true).unwrap();
        assert_eq!(result.platform_fee, dec!(0.02));
        assert_eq!(result.referral_fee, dec!(0.01));
        assert_eq!(result.professional_amount, dec!(0.12));
        assert_eq!(
            result.platform_fee + result.referral_fee + result.professional_amount,
            dec!(0.15)
        );
    }

    #[test]
    fn test_unrounded_total_sums_to_rounded_total() {
        let result = calculate_distribution(&rates(), dec!(100.005), true).unwrap();
        assert_eq!(result.total_price, dec!(100.01));
        assert_eq!(
            result.platform_fee + result.referral_fee + result.professional_amount,
            result.total_price
        );
    }

    #[test]
    fn test_invalid_total() {
        for total in [dec!(0), dec!(-10)] {
            let err = calculate_distribution(&rates(), total, false).unwrap_err();
            assert!(err
                .to_string()
                .contains("total price must be greater than zero"));
        }
    }

    #[test]
    fn test_total_too_large() {
        for referral in [false, true] {
            let err = calculate_distribution(&rates(), Decimal::MAX, referral).unwrap_err();
            assert!(matches!(err, PricingError::InvalidArgument { .. }));
            assert!(err.to_string().contains("total price is too large"));
        }
    }
}
