//! Localized currency text for displayed prices.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    /// Put a space between the symbol and the amount.
    pub spaced: bool,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub fraction_digits: usize,
}

impl CurrencyFormat {
    /// Brazilian real, `R$ 707.203`.
    pub fn brl() -> Self {
        Self {
            symbol: "R$".to_string(),
            spaced: true,
            thousands_separator: '.',
            decimal_separator: ',',
            fraction_digits: 0,
        }
    }

    /// US dollar, `$707,203`.
    pub fn usd() -> Self {
        Self {
            symbol: "$".to_string(),
            spaced: false,
            thousands_separator: ',',
            decimal_separator: '.',
            fraction_digits: 0,
        }
    }

    pub fn fraction_digits(mut self, digits: usize) -> Self {
        self.fraction_digits = digits;
        self
    }

    pub fn format(&self, value: f64) -> String {
        let text = format!("{:.*}", self.fraction_digits, value.abs());
        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (text.as_str(), None),
        };

        // "-0" after rounding reads as zero.
        let negative = value < 0.0 && text.bytes().any(|b| b.is_ascii_digit() && b != b'0');

        let mut out = String::with_capacity(text.len() + self.symbol.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        if self.spaced {
            out.push(' ');
        }
        out.push_str(&group_thousands(whole, self.thousands_separator));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brl()
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
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
    fn test_brl_format() {
        let brl = CurrencyFormat::brl();
        assert_eq!(brl.format(707_203.0), "R$ 707.203");
        assert_eq!(brl.format(2_757_403.0), "R$ 2.757.403");
        assert_eq!(brl.format(999.0), "R$ 999");
    }

    #[test]
    fn test_usd_format() {
        let usd = CurrencyFormat::usd();
        assert_eq!(usd.format(365_503.0), "$365,503");
        assert_eq!(usd.format(1_000.0), "$1,000");
    }

    #[test]
    fn test_fraction_digits() {
        let brl = CurrencyFormat::brl().fraction_digits(2);
        assert_eq!(brl.format(1234.5), "R$ 1.234,50");

        let usd = CurrencyFormat::usd().fraction_digits(2);
        assert_eq!(usd.format(0.126), "$0.13");
    }

    #[test]
    fn test_rounds_to_whole_units() {
        assert_eq!(CurrencyFormat::usd().format(1_999.6), "$2,000");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(CurrencyFormat::brl().format(-12_500.0), "-R$ 12.500");
        assert_eq!(CurrencyFormat::usd().format(-0.2), "$0");
    }
}
