//! Amount parsing and naira display formatting
//!
//! Profile figures arrive as free-text currency strings ("₦100,000",
//! "500000", "1,250,000.50"). All numeric entry points go through
//! [`parse_amount`], which never fails: anything unparseable degrades to 0.

/// Parse a currency string into an amount, defaulting to 0.0.
///
/// Strips currency symbols, commas, and whitespace before parsing. Keeps
/// digits, a leading minus, and the decimal point. Returns 0.0 for empty or
/// non-numeric input rather than erroring.
pub fn parse_amount(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Format an amount as naira with thousands separators and no decimals.
///
/// Matches the dashboard's en-NG currency display: `₦1,234,568`.
/// Fractional kobo are rounded away.
pub fn format_naira(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-₦{}", grouped)
    } else {
        format!("₦{}", grouped)
    }
}
