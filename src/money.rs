//! Monetary rounding and display helpers

/// Round a monetary amount to 2 decimal places (half away from zero).
///
/// Applied independently at each step of a projection, so rounding error can
/// accumulate across rows; callers comparing against closed-form values should
/// allow a cent of tolerance.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an amount as whole euros in Italian style, e.g. `17.409 €`.
///
/// The symbol is separated by a non-breaking space (U+00A0).
pub fn format_eur(value: f64) -> String {
    let whole = value.round();
    let negative = whole < 0.0;
    let digits = format!("{:.0}", whole.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}\u{a0}€", grouped)
    } else {
        format!("{}\u{a0}€", grouped)
    }
}
