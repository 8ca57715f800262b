//! Duration string parsing for environment-variable configuration
//!
//! Environment variables such as `JWT_ACCESS_DURATION` carry human-friendly
//! duration strings (`15m`, `7d`). This module converts them to seconds.

/// Parses a duration string into seconds.
///
/// Accepted forms: a bare integer (seconds), or an integer with one of the
/// suffixes `s`, `m`, `h`, `d`. The value must be strictly positive.
///
/// # Examples
///
/// ```
/// use ag_shared::parse_duration;
///
/// assert_eq!(parse_duration("30s").unwrap(), 30);
/// assert_eq!(parse_duration("15m").unwrap(), 900);
/// assert_eq!(parse_duration("7d").unwrap(), 604_800);
/// ```
pub fn parse_duration(value: &str) -> Result<i64, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(String::from("empty duration string"));
    }

    let (digits, multiplier) = match value.as_bytes()[value.len() - 1] {
        b's' => (&value[..value.len() - 1], 1),
        b'm' => (&value[..value.len() - 1], 60),
        b'h' => (&value[..value.len() - 1], 3_600),
        b'd' => (&value[..value.len() - 1], 86_400),
        b'0'..=b'9' => (value, 1),
        _ => return Err(format!("unknown duration suffix in '{}'", value)),
    };

    let amount: i64 = digits
        .parse()
        .map_err(|_| format!("invalid duration '{}'", value))?;

    if amount <= 0 {
        return Err(format!("duration must be positive, got '{}'", value));
    }

    amount
        .checked_mul(multiplier)
        .ok_or_else(|| format!("duration '{}' overflows", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_seconds() {
        assert_eq!(parse_duration("900").unwrap(), 900);
    }

    #[test]
    fn test_parse_suffixed() {
        assert_eq!(parse_duration("30s").unwrap(), 30);
        assert_eq!(parse_duration("15m").unwrap(), 900);
        assert_eq!(parse_duration("12h").unwrap(), 43_200);
        assert_eq!(parse_duration("7d").unwrap(), 604_800);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_duration(" 15m ").unwrap(), 900);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("15x").is_err());
        assert!(parse_duration("0m").is_err());
        assert!(parse_duration("-5m").is_err());
    }
}
