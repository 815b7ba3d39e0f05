//! String-level number formatting: thousands separators and fraction trimming.
//!
//! These helpers operate on already-rendered plain decimal strings
//! (`-1234.5600`), so they work the same for `Decimal` and integer output.
//! For rounding `Decimal` values, use the `decimal` sibling module.

/// Inserts `,` between every group of three integer digits. The fraction part
/// is left untouched.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Trims trailing fraction zeros (and a dangling `.`).
pub fn trim_fraction(formatted: &str) -> &str {
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    }
}

/// Trims trailing zeros, adds thousands separators.
pub fn display_formatted_string(formatted: &str) -> String {
    group_thousands(trim_fraction(formatted))
}
