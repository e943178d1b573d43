use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::decimal::Money;

/// format a value using Brazilian Real conventions
///
/// `R$` prefix, period as thousands separator, comma as decimal separator,
/// exactly two decimal places. This is the only place quote values are
/// rounded to centavos.
pub fn format_brl(value: Money) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_negative() && !rounded.is_zero();
    let total_centavos = (rounded.abs().as_decimal() * dec!(100)).to_i64().unwrap_or(0);

    let whole = group_thousands(total_centavos / 100);
    let centavos = total_centavos % 100;
    let sign = if negative { "-" } else { "" };

    format!("{sign}R$ {whole},{centavos:02}")
}

/// parse locale-formatted numeric input, degrading to zero
///
/// Strips whitespace and anything other than digits, comma, period, and
/// minus. A comma marks Brazilian formatting: periods become thousands
/// separators and are dropped, the comma becomes the decimal point. Without
/// a comma the text is parsed as-is. Blank or garbled input quotes zero so
/// a half-typed field never breaks a live quote.
pub fn parse_locale_number(input: &str) -> Money {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    if cleaned.is_empty() {
        return Money::ZERO;
    }

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    };

    match Money::from_str_exact(&normalized) {
        Ok(value) => value,
        Err(_) => {
            debug!(input, "unparseable numeric input, treating as zero");
            Money::ZERO
        }
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    grouped
}
