//! Permissive string-to-number conversion for CSV cells.
//!
//! Cells are converted by taking the longest leading prefix that reads as a
//! decimal number and ignoring whatever follows it, so `"12 t"` becomes `12.0`.
//! Anything without such a prefix becomes `NaN`; callers keep the `NaN` rather
//! than dropping the value.

/// Convert the leading numeric prefix of `s`, or return `NaN`.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let prefix = numeric_prefix(s);
    if prefix.is_empty() {
        return f64::NAN;
    }
    let unsigned = prefix.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" {
        return if prefix.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    prefix.parse::<f64>().unwrap_or(f64::NAN)
}

/// A missing cell converts to `NaN`.
pub fn parse_cell(cell: Option<&str>) -> f64 {
    cell.map_or(f64::NAN, parse_float)
}

/// Longest prefix matching `[+-]? (Infinity | digits [. digits] | . digits) ([eE] [+-]? digits)?`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return &s[..i + "Infinity".len()];
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    &s[..i]
}
