use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)([smhd])$").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid duration format: {0}")]
pub struct DurationParseError(pub String);

/// Parses a duration string such as `"30s"`, `"15m"`, `"2h"` or `"7d"` into
/// seconds.
///
/// Unlike the request-path validators this fails loudly. It parses trusted
/// configuration values (cache TTLs and the like), where a typo should stop
/// startup rather than silently become a different duration.
pub fn parse_duration_to_seconds(duration: &str) -> Result<u64, DurationParseError> {
    let captures = DURATION_REGEX
        .captures(duration)
        .ok_or_else(|| DurationParseError(duration.to_string()))?;

    let amount: u64 = captures[1]
        .parse()
        .map_err(|_| DurationParseError(duration.to_string()))?;
    let multiplier = match &captures[2] {
        "s" => 1,
        "m" => 60,
        "h" => 3_600,
        "d" => 86_400,
        _ => return Err(DurationParseError(duration.to_string())),
    };

    amount
        .checked_mul(multiplier)
        .ok_or_else(|| DurationParseError(duration.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_duration_to_seconds, DurationParseError};

    #[test]
    fn parses_each_unit() {
        assert_eq!(parse_duration_to_seconds("30s").unwrap(), 30);
        assert_eq!(parse_duration_to_seconds("15m").unwrap(), 900);
        assert_eq!(parse_duration_to_seconds("2h").unwrap(), 7200);
        assert_eq!(parse_duration_to_seconds("7d").unwrap(), 604_800);
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["bogus", "", "10", "s", "10 s", "3.5h", "-2m", "10w"] {
            let err = parse_duration_to_seconds(input).unwrap_err();
            assert_eq!(err, DurationParseError(input.to_string()));
        }
    }

    #[test]
    fn rejects_overflowing_amounts() {
        assert!(parse_duration_to_seconds("99999999999999999999s").is_err());
        assert!(parse_duration_to_seconds("18446744073709551615d").is_err());
    }

    #[test]
    fn error_message_names_the_input() {
        let err = parse_duration_to_seconds("bogus").unwrap_err();
        assert_eq!(err.to_string(), "Invalid duration format: bogus");
    }
}
