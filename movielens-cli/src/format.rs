//! Display formatting for amounts, ratings, and runtimes.

/// Group digits in threes: `1234567` → `"1,234,567"`.
pub(crate) fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A dollar amount with thousands separators, e.g. `"$1,500,000"`.
pub(crate) fn format_usd(amount: i64) -> String {
    format!("${}", format_thousands(amount))
}

/// A rating to two decimals.
pub(crate) fn format_rating(rating: f64) -> String {
    format!("{:.2}", rating)
}

pub(crate) fn format_runtime(minutes: Option<i64>) -> String {
    match minutes {
        Some(m) => m.to_string(),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
