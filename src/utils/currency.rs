//! Currency amount formatting.

/// Symbol prefix for a currency code.
///
/// Codes without a dedicated symbol fall back to the code itself.
fn symbol_for(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        other => other,
    }
}

/// Format an amount with thousands separators and two decimal places,
/// prefixed by the symbol for the currency code.
///
/// `format_currency(1234.56, "USD")` yields `$1,234.56`;
/// `format_currency(1000.0, "CAD")` yields `CAD1,000.00` via the fallback
/// prefix. Negative amounts keep the sign between prefix and digits.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let fixed = format!("{:.2}", amount);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    format!(
        "{}{}{}.{}",
        symbol_for(currency),
        sign,
        group_thousands(digits),
        frac_part
    )
}

/// Insert a comma between every group of three digits, counting from the
/// right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
