use serde_json::Value;

/// Largest integer a JSON number carries without precision loss.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

const MIN_TIMEZONE_OFFSET_MINUTES: i64 = -720;
const MAX_TIMEZONE_OFFSET_MINUTES: i64 = 840;
const MAX_PERFORMANCE_METRIC_MS: f64 = 300_000.0;
const MAX_SCROLL_DEPTH_PERCENT: i64 = 100;
const MAX_PAGE_COUNT: i64 = 10_000;
const MAX_INTERACTION_COUNT: i64 = 100_000;

// SDKs serialize numbers inconsistently, so numeric fields arrive either as
// JSON numbers or as decimal strings. Everything else is rejected.
pub(crate) fn parse_numeric(input: &Value) -> Option<f64> {
    let value = match input {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

/// Accepts a number or numeric string, rounds to the nearest integer and
/// bounds-checks it. Out-of-range or non-numeric input is `None`.
pub fn validate_numeric(input: &Value, min: i64, max: i64) -> Option<i64> {
    let rounded = parse_numeric(input)?.round();
    if rounded < min as f64 || rounded > max as f64 {
        return None;
    }
    Some(rounded as i64)
}

/// UTC offset in minutes, from UTC-12:00 to UTC+14:00.
pub fn validate_timezone_offset(input: &Value) -> Option<i64> {
    validate_numeric(
        input,
        MIN_TIMEZONE_OFFSET_MINUTES,
        MAX_TIMEZONE_OFFSET_MINUTES,
    )
}

/// Timing value in milliseconds, capped at five minutes. Kept fractional:
/// load and paint timings are sub-millisecond precise.
pub fn validate_performance_metric(input: &Value) -> Option<f64> {
    let value = parse_numeric(input)?;
    (0.0..=MAX_PERFORMANCE_METRIC_MS)
        .contains(&value)
        .then_some(value)
}

pub fn validate_scroll_depth(input: &Value) -> Option<i64> {
    validate_numeric(input, 0, MAX_SCROLL_DEPTH_PERCENT)
}

pub fn validate_page_count(input: &Value) -> Option<i64> {
    validate_numeric(input, 1, MAX_PAGE_COUNT)
}

pub fn validate_interaction_count(input: &Value) -> Option<i64> {
    validate_numeric(input, 0, MAX_INTERACTION_COUNT)
}

/// Exit-intent flag. Unlike its sibling validators this one degrades invalid
/// input to `0` rather than `None`, matching the behavior consumers already
/// rely on.
pub fn validate_exit_intent(input: &Value) -> i64 {
    validate_numeric(input, 0, 1).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(validate_numeric(&json!(42), 0, 100), Some(42));
        assert_eq!(validate_numeric(&json!("42.9"), 0, 100), Some(43));
        assert_eq!(validate_numeric(&json!(" 7 "), 0, 100), Some(7));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(validate_numeric(&json!("abc"), 0, 100), None);
        assert_eq!(validate_numeric(&json!(null), 0, 100), None);
        assert_eq!(validate_numeric(&json!(true), 0, 100), None);
        assert_eq!(validate_numeric(&json!([1]), 0, 100), None);
        assert_eq!(validate_numeric(&json!("NaN"), 0, 100), None);
        assert_eq!(validate_numeric(&json!("inf"), 0, 100), None);
    }

    #[test]
    fn enforces_range_after_rounding() {
        assert_eq!(validate_numeric(&json!(100.4), 0, 100), Some(100));
        assert_eq!(validate_numeric(&json!(100.6), 0, 100), None);
        assert_eq!(validate_numeric(&json!(-0.4), 0, 100), Some(0));
        assert_eq!(validate_numeric(&json!(-1), 0, 100), None);
    }

    #[test]
    fn timezone_offset_bounds() {
        assert_eq!(validate_timezone_offset(&json!(-720)), Some(-720));
        assert_eq!(validate_timezone_offset(&json!(840)), Some(840));
        assert_eq!(validate_timezone_offset(&json!(-721)), None);
        assert_eq!(validate_timezone_offset(&json!(841)), None);
        assert_eq!(validate_timezone_offset(&json!("60")), Some(60));
    }

    #[test]
    fn performance_metric_keeps_fraction() {
        assert_eq!(validate_performance_metric(&json!(1234.5)), Some(1234.5));
        assert_eq!(validate_performance_metric(&json!(300_000)), Some(300_000.0));
        assert_eq!(validate_performance_metric(&json!(300_001)), None);
        assert_eq!(validate_performance_metric(&json!(-1)), None);
        assert_eq!(validate_performance_metric(&json!("oops")), None);
    }

    #[test]
    fn engagement_counter_bounds() {
        assert_eq!(validate_scroll_depth(&json!(55.5)), Some(56));
        assert_eq!(validate_scroll_depth(&json!(101)), None);
        assert_eq!(validate_page_count(&json!(0)), None);
        assert_eq!(validate_page_count(&json!(1)), Some(1));
        assert_eq!(validate_interaction_count(&json!(100_000)), Some(100_000));
        assert_eq!(validate_interaction_count(&json!(100_001)), None);
    }

    #[test]
    fn exit_intent_defaults_to_zero() {
        assert_eq!(validate_exit_intent(&json!(1)), 1);
        assert_eq!(validate_exit_intent(&json!(0)), 0);
        assert_eq!(validate_exit_intent(&json!(2)), 0);
        assert_eq!(validate_exit_intent(&json!("nope")), 0);
        assert_eq!(validate_exit_intent(&json!(null)), 0);
    }
}
