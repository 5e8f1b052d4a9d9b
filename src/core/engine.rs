use crate::core::distribution::calculate_distribution;
use crate::core::price::calculate_total_price;
use crate::core::service::calculate_service_price;
use crate::domain::model::{DistributionResult, ServicePrice};
use crate::domain::rates::RateConfiguration;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use rust_decimal::Decimal;

/// Owns a validated rate table and runs calculations against it.
///
/// Holds no mutable state; share it by reference or behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    rates: RateConfiguration,
}

impl PricingEngine {
    pub fn new(rates: RateConfiguration) -> Result<Self> {
        rates.validate()?;
        tracing::debug!(?rates, "Pricing engine ready");
        Ok(Self { rates })
    }

    pub fn rates(&self) -> &RateConfiguration {
        &self.rates
    }

    pub fn total_price(
        &self,
        area: Decimal,
        complexity_level: u8,
        apply_discount: bool,
    ) -> Result<Decimal> {
        calculate_total_price(&self.rates, area, complexity_level, apply_discount)
            .inspect_err(|e| tracing::warn!("Price calculation rejected: {}", e))
    }

    pub fn distribution(
        &self,
        total_price: Decimal,
        referral_applies: bool,
    ) -> Result<DistributionResult> {
        calculate_distribution(&self.rates, total_price, referral_applies)
            .inspect_err(|e| tracing::warn!("Distribution rejected: {}", e))
    }

    pub fn service_price(
        &self,
        area: Decimal,
        complexity_level: u8,
        referral_applies: bool,
        apply_discount: bool,
    ) -> Result<ServicePrice> {
        calculate_service_price(
            &self.rates,
            area,
            complexity_level,
            referral_applies,
            apply_discount,
        )
        .inspect_err(|e| tracing::warn!("Service price rejected: {}", e))
    }
}
