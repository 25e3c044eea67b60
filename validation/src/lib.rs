pub mod duration;
pub mod event;
pub mod fields;
pub mod headers;
pub mod numeric;
pub mod properties;
pub mod string;

pub use duration::{parse_duration_to_seconds, DurationParseError};
pub use event::{RawEvent, SanitizedEvent};
pub use fields::{
    validate_language, validate_screen_resolution, validate_session_id, validate_timezone,
    validate_url, validate_utm_parameter, validate_viewport_size,
};
pub use headers::{filter_safe_headers, HeaderAllowList, MAX_HEADER_VALUE_LENGTH};
pub use numeric::{
    validate_exit_intent, validate_interaction_count, validate_numeric, validate_page_count,
    validate_performance_metric, validate_scroll_depth, validate_timezone_offset,
    MAX_SAFE_INTEGER,
};
pub use properties::{
    validate_payload_size, validate_properties, MAX_PAYLOAD_SIZE, MAX_PROPERTY_COUNT,
    MAX_PROPERTY_KEY_LENGTH,
};
pub use string::{sanitize_string, DEFAULT_MAX_STRING_LENGTH};
