//! Permissive numeric parsing
//!
//! Numbers read from the data file or typed at a prompt are taken from the
//! longest numeric prefix of the text, the way C's `atoi`/`atof` read them.
//! Text without a numeric prefix yields nothing, and callers treat that as 0.

/// Index just past a run of ASCII digits starting at `start`
fn scan_digits(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Index just past an optional leading sign
fn scan_sign(bytes: &[u8], start: usize) -> usize {
    match bytes.get(start) {
        Some(b'+') | Some(b'-') => start + 1,
        _ => start,
    }
}

/// Longest `[+-]?digits` prefix after leading whitespace
pub fn integer_prefix(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_start = scan_sign(bytes, 0);
    let end = scan_digits(bytes, digits_start);
    (end > digits_start).then(|| &s[..end])
}

/// Longest `[+-]?digits[.digits][e[+-]digits]` prefix after leading whitespace
pub fn decimal_prefix(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let int_start = scan_sign(bytes, 0);
    let mut end = scan_digits(bytes, int_start);
    let mut digit_count = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = scan_digits(bytes, end + 1);
        digit_count += frac_end - (end + 1);
        end = frac_end;
    }
    if digit_count == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let exp_start = scan_sign(bytes, end + 1);
        let exp_end = scan_digits(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

/// Parse an integer permissively, saturating on overflow
pub fn parse_i64(s: &str) -> i64 {
    let Some(prefix) = integer_prefix(s) else {
        return 0;
    };
    prefix.parse::<i64>().unwrap_or_else(|_| {
        if prefix.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

/// Parse a decimal number permissively
pub fn parse_f64(s: &str) -> f64 {
    decimal_prefix(s)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(0.0)
}
