use faxismart_pricing::{
    calculate_distribution, calculate_service_price, calculate_total_price, PricingEngine,
    PricingError, RateConfiguration,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn rates() -> RateConfiguration {
    RateConfiguration::default()
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[test]
fn test_documented_scenarios() -> anyhow::Result<()> {
    // A, B, C
    assert_eq!(calculate_total_price(&rates(), dec!(100), 1, false)?, dec!(150));
    assert_eq!(calculate_total_price(&rates(), dec!(100), 2, false)?, dec!(165));
    assert_eq!(calculate_total_price(&rates(), dec!(100), 1, true)?, dec!(135));

    // D
    let d = calculate_distribution(&rates(), dec!(150), false)?;
    assert_eq!(
        (d.platform_fee, d.referral_fee, d.professional_amount),
        (dec!(15), dec!(0), dec!(135))
    );

    // E
    let e = calculate_distribution(&rates(), dec!(150), true)?;
    assert_eq!(
        (e.platform_fee, e.referral_fee, e.professional_amount),
        (dec!(15), dec!(7.5), dec!(127.5))
    );

    // F
    let f = calculate_service_price(&rates(), dec!(100), 1, true, true)?;
    assert_eq!(f.pricing.total_price, dec!(135));
    assert_eq!(
        (
            f.distribution.platform_fee,
            f.distribution.referral_fee,
            f.distribution.professional_amount
        ),
        (dec!(13.5), dec!(6.75), dec!(114.75))
    );

    Ok(())
}

#[test]
fn test_price_matches_formula_for_every_level() -> anyhow::Result<()> {
    let rates = rates();
    for (level, multiplier) in rates.complexity_multipliers.iter() {
        for area in [dec!(1), dec!(12.5), dec!(37), dec!(80), dec!(333.33), dec!(1000)] {
            let expected = round2(area * dec!(1.5) * multiplier);
            assert_eq!(
                calculate_total_price(&rates, area, level, false)?,
                expected,
                "area {} level {}",
                area,
                level
            );
        }
    }
    Ok(())
}

#[test]
fn test_discount_is_ten_percent_off_for_whole_areas() -> anyhow::Result<()> {
    let rates = rates();
    for level in 1..=5u8 {
        for area in [1, 7, 45, 80, 120, 999] {
            let area = Decimal::from(area);
            let full = calculate_total_price(&rates, area, level, false)?;
            let discounted = calculate_total_price(&rates, area, level, true)?;
            assert_eq!(discounted, round2(full * dec!(0.9)));
        }
    }
    Ok(())
}

#[test]
fn test_distribution_parts_sum_to_rounded_total() -> anyhow::Result<()> {
    let totals = [
        dec!(0.01),
        dec!(0.15),
        dec!(1.99),
        dec!(54.99),
        dec!(99.995),
        dec!(118.8),
        dec!(1234.567),
    ];
    for total in totals {
        for referral in [false, true] {
            let split = calculate_distribution(&rates(), total, referral)?;
            assert_eq!(
                split.platform_fee + split.referral_fee + split.professional_amount,
                round2(total),
                "total {} referral {}",
                total,
                referral
            );
            if !referral {
                assert_eq!(split.referral_fee, Decimal::ZERO);
            }
        }
    }
    Ok(())
}

#[test]
fn test_repeated_calls_are_identical() -> anyhow::Result<()> {
    let engine = PricingEngine::default();
    let first = engine.service_price(dec!(63.7), 4, true, true)?;
    let second = engine.service_price(dec!(63.7), 4, true, true)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_boundaries_fail_with_invalid_argument() {
    let rates = rates();

    for area in [dec!(0), dec!(-1)] {
        assert!(matches!(
            calculate_total_price(&rates, area, 1, false),
            Err(PricingError::InvalidArgument { .. })
        ));
    }
    for level in [0u8, 6] {
        assert!(matches!(
            calculate_total_price(&rates, dec!(100), level, false),
            Err(PricingError::InvalidArgument { .. })
        ));
    }
    assert!(matches!(
        calculate_distribution(&rates, dec!(0), false),
        Err(PricingError::InvalidArgument { .. })
    ));
    assert!(matches!(
        calculate_service_price(&rates, dec!(100), 9, true, false),
        Err(PricingError::InvalidArgument { .. })
    ));
}

#[test]
fn test_huge_amounts_fail_instead_of_panicking() {
    let rates = rates();
    let engine = PricingEngine::default();

    assert!(matches!(
        calculate_distribution(&rates, Decimal::MAX, true),
        Err(PricingError::InvalidArgument { .. })
    ));
    assert!(matches!(
        calculate_total_price(&rates, Decimal::MAX / dec!(2), 1, true),
        Err(PricingError::InvalidArgument { .. })
    ));
    // prices fine, but the platform fee overflows
    assert!(matches!(
        engine.service_price(Decimal::MAX / dec!(4), 1, false, false),
        Err(PricingError::InvalidArgument { .. })
    ));
}

#[test]
fn test_overridden_rates_flow_through_the_facade() -> anyhow::Result<()> {
    let engine = PricingEngine::new(RateConfiguration {
        base_rate_per_area: dec!(2),
        platform_fee_percent: dec!(20),
        referral_fee_percent: dec!(10),
        ..Default::default()
    })?;

    let quote = engine.service_price(dec!(50), 3, true, false)?;
    // 50 × 2 × 1.2 = 120
    assert_eq!(quote.pricing.total_price, dec!(120));
    assert_eq!(quote.distribution.platform_fee, dec!(24));
    assert_eq!(quote.distribution.referral_fee, dec!(12));
    assert_eq!(quote.distribution.professional_amount, dec!(84));
    assert_eq!(quote.distribution.professional_percent, dec!(70));
    Ok(())
}
