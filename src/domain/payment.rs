use crate::domain::model::ServicePrice;
use crate::utils::error::{PricingError, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Pix,
}

impl FromStr for PaymentMethod {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit_card" => Ok(Self::CreditCard),
            "debit_card" => Ok(Self::DebitCard),
            "pix" => Ok(Self::Pix),
            other => Err(PricingError::invalid_argument(format!(
                "unsupported payment method: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreditCard => "credit_card",
            Self::DebitCard => "debit_card",
            Self::Pix => "pix",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Refunded,
    Failed,
}

/// Who is involved in a paid appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentParties {
    pub appointment_id: String,
    pub client_id: String,
    pub professional_id: String,
    pub referrer_id: Option<String>,
}

/// Amounts the payment collaborator persists for one appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub appointment_id: String,
    pub client_id: String,
    pub professional_id: String,
    pub referrer_id: Option<String>,
    pub amount: Decimal,
    pub platform_fee: Decimal,
    pub referral_fee: Decimal,
    pub professional_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl PaymentRecord {
    /// Builds a pending record from a quote. The quote's referral flag has to
    /// agree with whether the parties include a referrer.
    pub fn from_quote(
        parties: PaymentParties,
        payment_method: PaymentMethod,
        quote: &ServicePrice,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        for (field, value) in [
            ("appointment_id", &parties.appointment_id),
            ("client_id", &parties.client_id),
            ("professional_id", &parties.professional_id),
        ] {
            if value.trim().is_empty() {
                return Err(PricingError::invalid_argument(format!(
                    "{} is required",
                    field
                )));
            }
        }

        if quote.distribution.referral_applies != parties.referrer_id.is_some() {
            return Err(PricingError::invalid_argument(
                "referral flag does not match referrer",
            ));
        }

        Ok(Self {
            appointment_id: parties.appointment_id,
            client_id: parties.client_id,
            professional_id: parties.professional_id,
            referrer_id: parties.referrer_id,
            amount: quote.pricing.total_price,
            platform_fee: quote.distribution.platform_fee,
            referral_fee: quote.distribution.referral_fee,
            professional_amount: quote.distribution.professional_amount,
            payment_method,
            status: PaymentStatus::Pending,
            created_at,
        })
    }

    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::calculate_service_price;
    use crate::domain::rates::RateConfiguration;
    use rust_decimal_macros::dec;

    fn parties(referrer: Option<&str>) -> PaymentParties {
        PaymentParties {
            appointment_id: "apt-1".to_string(),
            client_id: "client-1".to_string(),
            professional_id: "pro-1".to_string(),
            referrer_id: referrer.map(str::to_string),
        }
    }

    #[test]
    fn test_record_from_quote() {
        let quote =
            calculate_service_price(&RateConfiguration::default(), dec!(100), 1, true, true)
                .unwrap();
        let record = PaymentRecord::from_quote(
            parties(Some("pro-7")),
            PaymentMethod::Pix,
            &quote,
            Utc::now(),
        )
        .unwrap();

        assert_eq!(record.amount, dec!(135));
        assert_eq!(record.platform_fee, dec!(13.5));
        assert_eq!(record.referral_fee, dec!(6.75));
        assert_eq!(record.professional_amount, dec!(114.75));
        assert_eq!(record.status, PaymentStatus::Pending);
        assert!(!record.is_completed());
        assert!(record.with_status(PaymentStatus::Completed).is_completed());
    }

    #[test]
    fn test_referral_flag_must_match_referrer() {
        let quote =
            calculate_service_price(&RateConfiguration::default(), dec!(100), 1, false, false)
                .unwrap();
        let err = PaymentRecord::from_quote(
            parties(Some("pro-7")),
            PaymentMethod::CreditCard,
            &quote,
            Utc::now(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("referral flag does not match referrer"));
    }

    #[test]
    fn test_missing_party_is_rejected() {
        let quote =
            calculate_service_price(&RateConfiguration::default(), dec!(50), 2, false, false)
                .unwrap();
        let mut incomplete = parties(None);
        incomplete.client_id = " ".to_string();
        assert!(PaymentRecord::from_quote(
            incomplete,
            PaymentMethod::DebitCard,
            &quote,
            Utc::now()
        )
        .is_err());
    }

    #[test]
    fn test_payment_method_parsing() {
        assert_eq!("pix".parse::<PaymentMethod>().unwrap(), PaymentMethod::Pix);
        assert_eq!(
            "Credit_Card".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CreditCard
        );
        assert!("cash".parse::<PaymentMethod>().is_err());
        assert_eq!(PaymentMethod::DebitCard.to_string(), "debit_card");
    }
}
