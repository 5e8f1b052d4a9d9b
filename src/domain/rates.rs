use crate::utils::error::{PricingError, Result};
use crate::utils::validation::{validate_percentage, validate_positive_decimal, Validate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Price multipliers for complexity levels 1 through 5.
///
/// Stored as a fixed five-slot table so the levels are always contiguous;
/// in TOML it is written as a plain array, `[1.0, 1.1, 1.2, 1.3, 1.4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplexityMultipliers([Decimal; 5]);

impl ComplexityMultipliers {
    pub const LEVELS: RangeInclusive<u8> = 1..=5;

    pub fn new(multipliers: [Decimal; 5]) -> Self {
        Self(multipliers)
    }

    /// Multiplier for `level`, or `None` when the level is not in 1..=5.
    pub fn get(&self, level: u8) -> Option<Decimal> {
        let index = usize::from(level.checked_sub(1)?);
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, Decimal)> + '_ {
        Self::LEVELS.zip(self.0.iter().copied())
    }
}

impl Default for ComplexityMultipliers {
    fn default() -> Self {
        // basic, intermediate, heavy, post-construction, specialized
        Self([dec!(1.0), dec!(1.1), dec!(1.2), dec!(1.3), dec!(1.4)])
    }
}

/// Immutable rate table every calculation reads from.
///
/// Every field has a default, so a partial `[rates]` table in a config file
/// only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfiguration {
    pub base_rate_per_area: Decimal,
    pub complexity_multipliers: ComplexityMultipliers,
    pub platform_fee_percent: Decimal,
    pub referral_fee_percent: Decimal,
    pub first_purchase_discount_percent: Decimal,
}

impl Default for RateConfiguration {
    fn default() -> Self {
        Self {
            base_rate_per_area: dec!(1.5),
            complexity_multipliers: ComplexityMultipliers::default(),
            platform_fee_percent: dec!(10),
            referral_fee_percent: dec!(5),
            first_purchase_discount_percent: dec!(10),
        }
    }
}

impl RateConfiguration {
    /// Share left to the professional, in percent.
    pub fn professional_percent(&self, referral_applies: bool) -> Decimal {
        let referral = if referral_applies {
            self.referral_fee_percent
        } else {
            Decimal::ZERO
        };
        Decimal::ONE_HUNDRED - self.platform_fee_percent - referral
    }
}

impl Validate for RateConfiguration {
    fn validate(&self) -> Result<()> {
        validate_positive_decimal("rates.base_rate_per_area", self.base_rate_per_area)?;

        for (level, multiplier) in self.complexity_multipliers.iter() {
            validate_positive_decimal(
                &format!("rates.complexity_multipliers[{}]", level),
                multiplier,
            )?;
        }

        validate_percentage("rates.platform_fee_percent", self.platform_fee_percent)?;
        validate_percentage("rates.referral_fee_percent", self.referral_fee_percent)?;
        validate_percentage(
            "rates.first_purchase_discount_percent",
            self.first_purchase_discount_percent,
        )?;

        let combined = self.platform_fee_percent + self.referral_fee_percent;
        if combined > Decimal::ONE_HUNDRED {
            return Err(PricingError::InvalidConfigValueError {
                field: "rates.platform_fee_percent + rates.referral_fee_percent".to_string(),
                value: combined.to_string(),
                reason: "Fees cannot exceed 100% of the total price".to_string(),
            });
        }

        Ok(())
    }
}
