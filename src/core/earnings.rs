use crate::domain::payment::PaymentRecord;
use chrono::{DateTime, Months, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EarningsPeriod {
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl EarningsPeriod {
    /// Unknown or missing periods fall back to `All`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "week" => Self::Week,
            "month" => Self::Month,
            "year" => Self::Year,
            _ => Self::All,
        }
    }

    /// First instant counted for a summary taken at `now`.
    pub fn start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let start = match self {
            Self::Week => now.checked_sub_signed(TimeDelta::days(7)),
            Self::Month => now.checked_sub_months(Months::new(1)),
            Self::Year => now.checked_sub_months(Months::new(12)),
            Self::All => None,
        };
        start.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsSummary {
    pub professional_id: String,
    pub period: EarningsPeriod,
    pub total_services: usize,
    pub total_earnings: Decimal,
    pub referral_earnings: Decimal,
    pub total_amount: Decimal,
}

/// Sums what a professional earned over `period`: their share of completed
/// services plus referral fees from payments where they were the referrer.
pub fn summarize_earnings(
    payments: &[PaymentRecord],
    professional_id: &str,
    period: EarningsPeriod,
    now: DateTime<Utc>,
) -> EarningsSummary {
    let start = period.start(now);
    let in_window = |p: &&PaymentRecord| p.is_completed() && p.created_at >= start;

    let (total_services, total_earnings) = payments
        .iter()
        .filter(in_window)
        .filter(|p| p.professional_id == professional_id)
        .fold((0usize, Decimal::ZERO), |(count, sum), p| {
            (count + 1, sum + p.professional_amount)
        });

    let referral_earnings: Decimal = payments
        .iter()
        .filter(in_window)
        .filter(|p| p.referrer_id.as_deref() == Some(professional_id))
        .map(|p| p.referral_fee)
        .sum();

    tracing::debug!(
        professional_id,
        ?period,
        total_services,
        "Summarized earnings"
    );

    EarningsSummary {
        professional_id: professional_id.to_string(),
        period,
        total_services,
        total_earnings,
        referral_earnings,
        total_amount: total_earnings + referral_earnings,
    }
}
