pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::PricingFileConfig;

pub use core::{
    distribution::calculate_distribution, engine::PricingEngine, price::calculate_total_price,
    service::calculate_service_price,
};
pub use domain::model::{
    DistributionBreakdown, DistributionRequest, DistributionResult, PricingRequest, PricingResult,
    ServicePrice,
};
pub use domain::rates::{ComplexityMultipliers, RateConfiguration};
pub use utils::error::{PricingError, Result};
