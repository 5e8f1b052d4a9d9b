use crate::utils::error::{PricingError, Result};
use crate::utils::validation::validate_non_empty_string;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const CODE_PREFIX: &str = "FX";
const NAME_LETTERS: usize = 4;
const NAME_PADDING: char = 'X';

/// Referral code shared by a user: `FX`, four letters of the owner's name,
/// then four digits (`FXMARI4821`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferralCode(String);

impl ReferralCode {
    pub fn generate<R: Rng + ?Sized>(owner_name: &str, rng: &mut R) -> Result<Self> {
        validate_non_empty_string("owner_name", owner_name)?;

        let mut letters: String = owner_name
            .chars()
            .flat_map(char::to_uppercase)
            .filter(|c| is_code_letter(*c))
            .take(NAME_LETTERS)
            .collect();
        while letters.chars().count() < NAME_LETTERS {
            letters.push(NAME_PADDING);
        }

        let digits: u16 = rng.gen_range(1000..=9999);
        let code = format!("{}{}{}", CODE_PREFIX, letters, digits);
        tracing::debug!(code = %code, "Generated referral code");
        Ok(Self(code))
    }

    pub fn parse(code: &str) -> Result<Self> {
        let code = code.trim();
        let invalid = || PricingError::invalid_argument(format!("invalid referral code: {}", code));

        let rest = code.strip_prefix(CODE_PREFIX).ok_or_else(invalid)?;
        let chars: Vec<char> = rest.chars().collect();
        if chars.len() != NAME_LETTERS + 4 {
            return Err(invalid());
        }

        let (letters, digits) = chars.split_at(NAME_LETTERS);
        let letters_ok = letters.iter().all(|c| is_code_letter(*c));
        let digits_ok = digits.iter().all(|c| c.is_ascii_digit()) && digits[0] != '0';
        if !letters_ok || !digits_ok {
            return Err(invalid());
        }

        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ReferralCode {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ReferralCode {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ReferralCode> for String {
    fn from(code: ReferralCode) -> Self {
        code.0
    }
}

impl fmt::Display for ReferralCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uppercase letters only; titlecase and caseless scripts are left out.
fn is_code_letter(c: char) -> bool {
    c.is_alphabetic() && c.is_uppercase()
}

/// A user cannot apply the code they own.
pub fn ensure_not_self_referral(code_owner_id: &str, user_id: &str) -> Result<()> {
    if code_owner_id == user_id {
        return Err(PricingError::invalid_argument(
            "cannot apply your own referral code",
        ));
    }
    Ok(())
}
