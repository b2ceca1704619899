//! Money type for representing monetary values.
//!
//! Uses an integer count of the currency's smallest unit. Rupiah has no
//! minor unit in practice, so for the storefront's default currency one unit
//! is one rupiah.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    IDR,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "IDR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::IDR => "IDR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "Rp").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::IDR => "Rp",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::IDR => 0,
            _ => 2,
        }
    }

    /// Separator between groups of thousands.
    fn group_separator(&self) -> char {
        match self {
            Currency::IDR | Currency::EUR => '.',
            Currency::USD => ',',
        }
    }

    /// Separator before the fractional part.
    fn decimal_separator(&self) -> char {
        match self {
            Currency::IDR | Currency::EUR => ',',
            Currency::USD => '.',
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "IDR" => Some(Currency::IDR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
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
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from smallest units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Shorthand for a rupiah amount.
    pub fn idr(amount: i64) -> Self {
        Self::new(amount, Currency::IDR)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns `None` if any value has a different currency or the sum overflows.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Format as a display string (e.g., "Rp450.000", "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol, using the currency's separators.
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let abs = self.amount.unsigned_abs();
        let whole = group_thousands(abs / divisor, self.currency.group_separator());
        if places == 0 {
            whole
        } else {
            format!(
                "{}{}{:0width$}",
                whole,
                self.currency.decimal_separator(),
                abs % divisor,
                width = places as usize
            )
        }
    }

    /// Compact thousands display used on dashboards (e.g., "Rp670 K").
    pub fn display_thousands(&self) -> String {
        let divisor = 10_i64.pow(self.currency.decimal_places()) * 1000;
        let thousands = (self.amount as f64 / divisor as f64).round() as i64;
        format!("{}{} K", self.currency.symbol(), thousands)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_idr_display() {
        assert_eq!(Money::idr(450_000).display(), "Rp450.000");
        assert_eq!(Money::idr(25_000).display(), "Rp25.000");
        assert_eq!(Money::idr(999).display(), "Rp999");
        assert_eq!(Money::idr(1_234_567).display(), "Rp1.234.567");
        assert_eq!(Money::idr(0).display(), "Rp0");
    }

    #[test]
    fn test_money_usd_display() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");

        let m = Money::new(123_456_701, Currency::USD);
        assert_eq!(m.display(), "$1,234,567.01");
    }

    #[test]
    fn test_money_negative_display() {
        assert_eq!(Money::idr(-5000).display(), "-Rp5.000");
    }

    #[test]
    fn test_display_thousands() {
        assert_eq!(Money::idr(670_000).display_thousands(), "Rp670 K");
        assert_eq!(Money::idr(1_280_000).display_thousands(), "Rp1280 K");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::idr(100);
        let b = Money::idr(200);
        assert_eq!(a.try_add(&b), Some(Money::idr(300)));
    }

    #[test]
    fn test_money_currency_mismatch() {
        let idr = Money::idr(1000);
        let usd = Money::new(1000, Currency::USD);
        assert_eq!(idr.try_add(&usd), None);
    }

    #[test]
    fn test_money_overflow() {
        let a = Money::idr(i64::MAX);
        assert_eq!(a.try_add(&Money::idr(1)), None);
    }

    #[test]
    fn test_try_sum() {
        let values = [Money::idr(100), Money::idr(200), Money::idr(25)];
        let total = Money::try_sum(values.iter(), Currency::IDR).unwrap();
        assert_eq!(total.amount, 325);

        let empty: [Money; 0] = [];
        assert_eq!(Money::try_sum(empty.iter(), Currency::IDR), Some(Money::idr(0)));

        let mixed = [Money::idr(100), Money::new(5, Currency::USD)];
        assert_eq!(Money::try_sum(mixed.iter(), Currency::IDR), None);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("IDR"), Some(Currency::IDR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
