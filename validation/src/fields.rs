use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use url::Url;

use crate::string::{sanitize_string, DEFAULT_MAX_STRING_LENGTH};

pub const MAX_TIMEZONE_LENGTH: usize = 64;
pub const MAX_LANGUAGE_LENGTH: usize = 35;
pub const MAX_SESSION_ID_LENGTH: usize = 128;
pub const MAX_UTM_LENGTH: usize = 512;
pub const MAX_DIMENSIONS_LENGTH: usize = 32;

// Inputs are length-capped before matching, so none of these patterns can
// backtrack pathologically.
static TIMEZONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_/+-]{1,64}$").unwrap());
static LANGUAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}(-[a-z0-9]{2,8})*$").unwrap());
static SESSION_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());
static DIMENSIONS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,5}x\d{1,5}$").unwrap());

/// IANA-style zone name such as `America/New_York`. Anything that does not
/// look like one degrades to `""`.
pub fn validate_timezone(input: &Value) -> String {
    let candidate = sanitize_string(input, MAX_TIMEZONE_LENGTH);
    if TIMEZONE_REGEX.is_match(&candidate) {
        candidate
    } else {
        String::new()
    }
}

/// BCP 47-style tag such as `en` or `en-us`, normalized to lower case.
pub fn validate_language(input: &Value) -> String {
    let candidate = sanitize_string(input, MAX_LANGUAGE_LENGTH).to_lowercase();
    if LANGUAGE_REGEX.is_match(&candidate) {
        candidate
    } else {
        String::new()
    }
}

/// Client-generated session identifier: url-safe characters only.
pub fn validate_session_id(input: &Value) -> String {
    let candidate = sanitize_string(input, MAX_SESSION_ID_LENGTH);
    if SESSION_ID_REGEX.is_match(&candidate) {
        candidate
    } else {
        String::new()
    }
}

/// UTM parameters are free-form labels; sanitization is the only gate.
pub fn validate_utm_parameter(input: &Value) -> String {
    sanitize_string(input, MAX_UTM_LENGTH)
}

/// Absolute `http`/`https` URL. Returns the sanitized input string rather
/// than the re-serialized URL, so the stored value is what the client sent
/// minus the stripped characters. `javascript:` and friends degrade to `""`.
pub fn validate_url(input: &Value) -> String {
    let candidate = sanitize_string(input, DEFAULT_MAX_STRING_LENGTH);
    if candidate.is_empty() {
        return candidate;
    }
    match Url::parse(&candidate) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => candidate,
        _ => String::new(),
    }
}

/// Device screen dimensions in `WxH` form, e.g. `1920x1080`.
pub fn validate_screen_resolution(input: &Value) -> String {
    validate_dimensions(input)
}

/// Browser viewport dimensions, same shape as the screen resolution.
pub fn validate_viewport_size(input: &Value) -> String {
    validate_dimensions(input)
}

fn validate_dimensions(input: &Value) -> String {
    let candidate = sanitize_string(input, MAX_DIMENSIONS_LENGTH);
    if DIMENSIONS_REGEX.is_match(&candidate) {
        candidate
    } else {
        String::new()
    }
}
