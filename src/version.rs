//! Lenient version-string parsing.
//!
//! Device and catalog versions arrive as free-form strings ("12.1.4", "9",
//! "13.0 beta"). Only the leading number matters, the rest is ignored.

/// Parse the leading decimal number of a version string.
///
/// `"12.1.4"` yields `12.1`, `"9"` yields `9.0`, `"abc"` and `""` yield `None`.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        } else if has_digits {
            // "12." parses as 12
            end = frac_start;
        }
    }

    if !has_digits {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

/// Parse the leading integer of a version string ("10.0.3" yields 10).
pub fn parse_major(input: &str) -> Option<u32> {
    let s = input.trim_start();
    let digits = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    s[..digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_prefix() {
        assert_eq!(parse_float_prefix("12.0"), Some(12.0));
        assert_eq!(parse_float_prefix("12.1.4"), Some(12.1));
        assert_eq!(parse_float_prefix("9"), Some(9.0));
        assert_eq!(parse_float_prefix("  14.5 beta"), Some(14.5));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("12."), Some(12.0));
    }

    #[test]
    fn test_float_prefix_rejects_garbage() {
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
    }

    #[test]
    fn test_major() {
        assert_eq!(parse_major("10"), Some(10));
        assert_eq!(parse_major("8.1.0"), Some(8));
        assert_eq!(parse_major(" 12"), Some(12));
        assert_eq!(parse_major("Q"), None);
        assert_eq!(parse_major(""), None);
    }
}
