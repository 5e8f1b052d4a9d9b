use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRequest {
    pub area: Decimal,
    pub complexity_level: u8,
    #[serde(default)]
    pub apply_first_purchase_discount: bool,
}

/// Price breakdown for one cleaning service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    pub area: Decimal,
    pub base_rate_per_area: Decimal,
    pub complexity_level: u8,
    pub complexity_multiplier: Decimal,
    /// `area × base_rate_per_area`, unrounded.
    pub base_price: Decimal,
    pub discount_applied: bool,
    pub discount_percent: Decimal,
    pub discount_amount: Decimal,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionRequest {
    pub total_price: Decimal,
    #[serde(default)]
    pub referral_applies: bool,
}

/// How a total is split. The three parts add up to `total_price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionResult {
    pub total_price: Decimal,
    pub platform_fee: Decimal,
    pub referral_fee: Decimal,
    pub professional_amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionBreakdown {
    pub platform_fee_percent: Decimal,
    pub platform_fee: Decimal,
    pub referral_applies: bool,
    /// Zero when no referral applies.
    pub referral_fee_percent: Decimal,
    pub referral_fee: Decimal,
    pub professional_amount: Decimal,
    pub professional_percent: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePrice {
    pub pricing: PricingResult,
    pub distribution: DistributionBreakdown,
}

impl ServicePrice {
    pub fn total_price(&self) -> Decimal {
        self.pricing.total_price
    }
}
