//! Monetary values in integer minor units.
//!
//! Prices are stored in the smallest unit of their currency so cart
//! totals never go through floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// Currencies the storefront prices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Colombian peso.
    #[default]
    COP,
    /// Argentine peso.
    ARS,
    /// Mexican peso.
    MXN,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "COP").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::COP => "COP",
            Currency::ARS => "ARS",
            Currency::MXN => "MXN",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the symbol listings display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::COP | Currency::ARS | Currency::MXN => "$",
            Currency::USD => "US$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Decimal places shown for this currency. Peso prices in the catalog
    /// are whole amounts.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::COP => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "COP" => Some(Currency::COP),
            "ARS" => Some(Currency::ARS),
            "MXN" => Some(Currency::MXN),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl FromStr for Currency {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CommerceError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// The amount is in minor units (centavos for ARS, whole pesos for COP,
/// which has no displayed decimals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest displayed unit of the currency.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use mercadito_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_minor, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        Self::new((amount * multiplier as f64).round() as i64, currency)
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Add another value. `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|a| Money::new(a, self.currency))
    }

    /// Subtract another value. `None` on currency mismatch or overflow.
    pub fn try_sub(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_sub(other.amount_minor)
            .map(|a| Money::new(a, self.currency))
    }

    /// Multiply by a scalar. `None` on overflow.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|a| Money::new(a, self.currency))
    }

    /// Multiply by a scalar, clamping at the representable range.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money::new(self.amount_minor.saturating_mul(factor), self.currency)
    }

    /// Add an amount in the same currency, clamping at the representable
    /// range. The other value's currency is not checked; carts are
    /// single-currency by construction.
    pub fn saturating_add_amount(&self, other: &Money) -> Money {
        Money::new(
            self.amount_minor.saturating_add(other.amount_minor),
            self.currency,
        )
    }

    /// Convert to a decimal value for display math.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format with symbol, es-AR style: `$1.250.000` or `$49,99`.
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol: dot thousands grouping, comma decimals.
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        let whole = group_thousands(abs / divisor);
        if places == 0 {
            format!("{sign}{whole}")
        } else {
            let frac = abs % divisor;
            format!("{sign}{whole},{frac:0width$}", width = places as usize)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Group an unsigned number with dots: `1250000` becomes `1.250.000`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_from_minor_units() {
        let m = Money::new(1_250_000, Currency::COP);
        assert_eq!(m.amount_minor, 1_250_000);
        assert_eq!(m.currency, Currency::COP);
    }

    #[test]
    fn money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_minor, 4999);

        // COP has no displayed decimals
        let m = Money::from_decimal(1_250_000.0, Currency::COP);
        assert_eq!(m.amount_minor, 1_250_000);
    }

    #[test]
    fn cop_displays_without_decimals() {
        let m = Money::new(1_250_000, Currency::COP);
        assert_eq!(m.display(), "$1.250.000");
    }

    #[test]
    fn ars_displays_with_comma_decimals() {
        let m = Money::new(125_050, Currency::ARS);
        assert_eq!(m.display(), "$1.250,50");
    }

    #[test]
    fn usd_displays_with_prefix() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "US$49,99");
    }

    #[test]
    fn negative_amounts_keep_the_sign() {
        let m = Money::new(-1500, Currency::USD);
        assert_eq!(m.display_amount(), "-15,00");
    }

    #[test]
    fn try_add_same_currency() {
        let a = Money::new(1000, Currency::COP);
        let b = Money::new(500, Currency::COP);
        assert_eq!(a.try_add(&b), Some(Money::new(1500, Currency::COP)));
    }

    #[test]
    fn try_add_currency_mismatch_is_none() {
        let cop = Money::new(1000, Currency::COP);
        let usd = Money::new(1000, Currency::USD);
        assert_eq!(cop.try_add(&usd), None);
    }

    #[test]
    fn saturating_mul_clamps() {
        let m = Money::new(i64::MAX, Currency::COP);
        assert_eq!(m.saturating_mul(2).amount_minor, i64::MAX);
    }

    #[test]
    fn currency_from_code() {
        assert_eq!(Currency::from_code("cop"), Some(Currency::COP));
        assert_eq!(Currency::from_code("ARS"), Some(Currency::ARS));
        assert_eq!(Currency::from_code("XYZ"), None);
    }

    #[test]
    fn currency_from_str_reports_the_code() {
        let err = "XYZ".parse::<Currency>().unwrap_err();
        assert!(err.to_string().contains("XYZ"));
    }
}
