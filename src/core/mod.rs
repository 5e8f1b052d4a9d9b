pub mod batch;
pub mod distribution;
pub mod earnings;
pub mod engine;
pub mod money;
pub mod price;
pub mod service;

pub use crate::domain::model::{
    DistributionBreakdown, DistributionRequest, DistributionResult, PricingRequest, PricingResult,
    ServicePrice,
};
pub use crate::domain::rates::RateConfiguration;
pub use crate::utils::error::Result;
