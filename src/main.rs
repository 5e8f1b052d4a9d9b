use clap::Parser;
use faxismart_pricing::core::batch::quote_csv_file;
use faxismart_pricing::domain::referral::ReferralCode;
use faxismart_pricing::utils::error::ErrorCategory;
use faxismart_pricing::utils::{logger, validation::Validate};
use faxismart_pricing::{CliConfig, Command, PricingEngine, PricingError, Result, ServicePrice};
use serde::Serialize;

fn main() {
    let config = CliConfig::parse();

    let file_config = match config.load_file_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            logger::init_cli_logger(config.verbose);
            fail(&e);
        }
    };

    let verbose = config.verbose || file_config.verbose();
    if file_config.json_logging() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = file_config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let rates = config.apply_overrides(file_config.rates);
    let engine = match PricingEngine::new(rates) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("❌ Rate overrides rejected: {}", e);
            fail(&e);
        }
    };

    if let Err(e) = run(&config, &engine) {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        fail(&e);
    }
}

fn run(config: &CliConfig, engine: &PricingEngine) -> Result<()> {
    match &config.command {
        Command::Price {
            area,
            complexity,
            discount,
        } => {
            let total_price = engine.total_price(*area, *complexity, *discount)?;
            if config.json {
                print_json(&serde_json::json!({ "total_price": total_price }))?;
            } else {
                println!("Total price: {:.2}", total_price);
            }
        }
        Command::Distribute { total, referral } => {
            let split = engine.distribution(*total, *referral)?;
            if config.json {
                print_json(&split)?;
            } else {
                println!("Total price:         {:.2}", split.total_price);
                println!("Platform fee:        {:.2}", split.platform_fee);
                println!("Referral fee:        {:.2}", split.referral_fee);
                println!("Professional amount: {:.2}", split.professional_amount);
            }
        }
        Command::Quote {
            area,
            complexity,
            referral,
            discount,
        } => {
            let quote = engine.service_price(*area, *complexity, *referral, *discount)?;
            if config.json {
                print_json(&quote)?;
            } else {
                print_quote(&quote);
            }
        }
        Command::Batch { input, output } => {
            tracing::info!("📁 Quoting {} -> {}", input.display(), output.display());
            let count = quote_csv_file(engine.rates(), input, output)?;
            println!("✅ Quoted {} rows into {}", count, output.display());
        }
        Command::ReferralCode { name } => {
            let code = ReferralCode::generate(name, &mut rand::thread_rng())?;
            if config.json {
                print_json(&serde_json::json!({ "referral_code": code }))?;
            } else {
                println!("{}", code);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_quote(quote: &ServicePrice) {
    let pricing = &quote.pricing;
    let split = &quote.distribution;

    println!("Area:                {} m²", pricing.area);
    println!("Rate per m²:         {:.2}", pricing.base_rate_per_area);
    println!(
        "Complexity:          level {} (x{})",
        pricing.complexity_level, pricing.complexity_multiplier
    );
    println!("Base price:          {:.2}", pricing.base_price);
    if pricing.discount_applied {
        println!(
            "Discount ({}%):      -{:.2}",
            pricing.discount_percent, pricing.discount_amount
        );
    }
    println!("Total price:         {:.2}", pricing.total_price);
    println!();
    println!(
        "Platform ({}%):       {:.2}",
        split.platform_fee_percent, split.platform_fee
    );
    if split.referral_applies {
        println!(
            "Referral ({}%):        {:.2}",
            split.referral_fee_percent, split.referral_fee
        );
    }
    println!(
        "Professional ({}%):   {:.2}",
        split.professional_percent, split.professional_amount
    );
}

fn fail(e: &PricingError) -> ! {
    eprintln!("❌ {}", e);
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.category() {
        ErrorCategory::Input | ErrorCategory::Configuration => 1,
        ErrorCategory::System => 3,
    };
    std::process::exit(exit_code);
}
