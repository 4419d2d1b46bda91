//! Money type for menu prices.
//!
//! Amounts are stored in the currency's minor unit as integers to avoid
//! floating-point drift. KRW has no minor unit, so a Korean won amount is
//! stored as whole won and displayed grouped with a trailing `원`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    Krw,
    Usd,
}

impl Currency {
    /// Get the currency code (e.g., "KRW").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Krw => "KRW",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (whole won for KRW, cents for USD).
    pub amount: i64,
    /// The currency. Fixture and backend payloads may omit it; KRW applies.
    #[serde(default)]
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a Korean won amount.
    pub fn won(amount: i64) -> Self {
        Self::new(amount, Currency::Krw)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Format as a display string, grouped by thousands.
    ///
    /// ```
    /// use orderup_menu::money::Money;
    /// assert_eq!(Money::won(9990).display(), "9,990원");
    /// ```
    pub fn display(&self) -> String {
        let sign = if self.amount < 0 { "-" } else { "" };
        let minor = self.amount.unsigned_abs();
        match self.currency {
            Currency::Krw => format!("{sign}{}원", group_thousands(minor)),
            Currency::Usd => {
                format!("{sign}${}.{:02}", group_thousands(minor / 100), minor % 100)
            }
        }
    }

    /// Try to add another Money value, returning None if currencies differ.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(self.amount + other.amount, self.currency))
    }

    /// Multiply by a scalar (e.g., unit price times quantity).
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount * factor, self.currency)
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("Currency mismatch in addition")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Insert a comma every three digits: 1234567 -> "1,234,567".
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_won_display_grouping() {
        assert_eq!(Money::won(9990).display(), "9,990원");
        assert_eq!(Money::won(18900).display(), "18,900원");
        assert_eq!(Money::won(1234567).display(), "1,234,567원");
        assert_eq!(Money::won(500).display(), "500원");
        assert_eq!(Money::won(0).display(), "0원");
    }

    #[test]
    fn test_usd_display() {
        assert_eq!(Money::new(999, Currency::Usd).display(), "$9.99");
        assert_eq!(Money::new(123400, Currency::Usd).display(), "$1,234.00");
    }

    #[test]
    fn test_negative_display() {
        assert_eq!(Money::won(-1000).display(), "-1,000원");
    }

    #[test]
    fn test_unit_price_times_quantity() {
        let unit = Money::won(9990);
        assert_eq!((unit * 3).display(), "29,970원");
    }

    #[test]
    fn test_addition() {
        let a = Money::won(1000);
        let b = Money::won(500);
        assert_eq!((a + b).amount, 1500);
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let won = Money::won(1000);
        let usd = Money::new(1000, Currency::Usd);
        assert_eq!(won.try_add(&usd), None);
    }

    #[test]
    fn test_serde_currency_defaults_to_krw() {
        let m: Money = serde_json::from_str(r#"{"amount": 9990}"#).unwrap();
        assert_eq!(m, Money::won(9990));
    }
}
