use crate::config::toml_config::PricingFileConfig;
use crate::domain::rates::RateConfiguration;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "faxismart-pricing")]
#[command(about = "Price cleaning services and split payments between platform, referrer and professional")]
pub struct CliConfig {
    /// Path to a TOML file with a [rates] table
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the price per square meter
    #[arg(long, global = true)]
    pub base_rate: Option<Decimal>,

    /// Override the platform fee, in percent
    #[arg(long, global = true)]
    pub platform_fee: Option<Decimal>,

    /// Override the referral fee, in percent
    #[arg(long, global = true)]
    pub referral_fee: Option<Decimal>,

    /// Override the first-purchase discount, in percent
    #[arg(long, global = true)]
    pub discount_percent: Option<Decimal>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Total price for a service
    Price {
        #[arg(long, allow_hyphen_values = true)]
        area: Decimal,
        #[arg(long, allow_hyphen_values = true)]
        complexity: u8,
        /// Apply the first-purchase discount
        #[arg(long)]
        discount: bool,
    },

    /// Split a total between platform, referrer and professional
    Distribute {
        #[arg(long, allow_hyphen_values = true)]
        total: Decimal,
        #[arg(long)]
        referral: bool,
    },

    /// Price and split in one step
    Quote {
        #[arg(long, allow_hyphen_values = true)]
        area: Decimal,
        #[arg(long, allow_hyphen_values = true)]
        complexity: u8,
        #[arg(long)]
        referral: bool,
        #[arg(long)]
        discount: bool,
    },

    /// Quote every row of a CSV file
    Batch {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Generate a referral code for a user
    ReferralCode {
        #[arg(long)]
        name: String,
    },
}

impl CliConfig {
    /// Loads the config file when one was given, defaults otherwise.
    pub fn load_file_config(&self) -> Result<PricingFileConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                PricingFileConfig::from_file(path)
            }
            None => Ok(PricingFileConfig::default()),
        }
    }

    /// Command-line overrides take precedence over the file.
    pub fn apply_overrides(&self, mut rates: RateConfiguration) -> RateConfiguration {
        if let Some(base_rate) = self.base_rate {
            rates.base_rate_per_area = base_rate;
        }
        if let Some(platform_fee) = self.platform_fee {
            rates.platform_fee_percent = platform_fee;
        }
        if let Some(referral_fee) = self.referral_fee {
            rates.referral_fee_percent = referral_fee;
        }
        if let Some(discount) = self.discount_percent {
            rates.first_purchase_discount_percent = discount;
        }
        rates
    }
}
