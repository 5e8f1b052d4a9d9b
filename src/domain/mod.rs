// Domain layer: value types shared by the calculators and their callers.

pub mod model;
pub mod payment;
pub mod rates;
pub mod referral;
