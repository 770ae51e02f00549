//! Formatting helpers for report output

/// Format a currency value with thousands separators, e.g. `$12,345.60`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let total_cents = (value.abs() * 100.0).round() as i64;
    let dollars = total_cents / 100;
    let cents = total_cents % 100;

    let mut digits: Vec<u8> = dollars.to_string().into_bytes();
    digits.reverse();
    let mut grouped = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(b',');
        }
        grouped.push(*digit);
    }
    grouped.reverse();
    let dollars_formatted = String::from_utf8(grouped).unwrap_or_else(|_| dollars.to_string());

    format!("{sign}${dollars_formatted}.{cents:02}")
}

/// Format an annual rate already expressed in percent, e.g. `22.90%`.
pub fn format_rate(percent: f64) -> String {
    format!("{percent:.2}%")
}

/// Format a month count as a compact duration, e.g. `2y 4m`.
pub fn format_duration(months: u32) -> String {
    let years = months / 12;
    let remainder = months % 12;
    match (years, remainder) {
        (0, m) => format!("{m}m"),
        (y, 0) => format!("{y}y"),
        (y, m) => format!("{y}y {m}m"),
    }
}
