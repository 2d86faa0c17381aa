//! Money type with decimal precision and currency.
//!
//! Never use floating-point for money. This type wraps
//! `rust_decimal::Decimal` and renders amounts the way the dashboard shows
//! them (pt-PT grouping: `1.234,56 €`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g., euros).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro
    Eur,
}

impl Currency {
    /// Symbol printed after the amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eur => "€",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a euro amount.
    #[must_use]
    pub const fn eur(amount: Decimal) -> Self {
        Self::new(amount, Currency::Eur)
    }

    /// Rounds to whole cents, the precision every amount is displayed with.
    #[must_use]
    pub fn to_cents(self) -> Self {
        Self::new(self.amount.round_dp(2), self.currency)
    }

    /// Returns true if the amount is negative once rounded to cents.
    ///
    /// `-0.004` is not negative: it is displayed as `0,00 €`.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        let cents = self.amount.round_dp(2);
        cents.is_sign_negative() && !cents.is_zero()
    }

    /// Formats with an explicit `+` for non-negative amounts, used for deviations.
    #[must_use]
    pub fn to_signed_string(&self) -> String {
        if self.is_negative() {
            self.to_string()
        } else {
            format!("+{self}")
        }
    }
}

/// Groups the integer digits in threes with `.`.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = format!("{:.2}", self.to_cents().amount.abs());
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(
            f,
            "{},{} {}",
            group_thousands(int_part),
            frac_part,
            self.currency.symbol()
        )
    }
}
