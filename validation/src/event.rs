use std::collections::HashMap;

use http::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::{
    validate_language, validate_screen_resolution, validate_session_id, validate_timezone,
    validate_url, validate_utm_parameter, validate_viewport_size,
};
use crate::headers::{filter_safe_headers, HeaderAllowList};
use crate::numeric::{
    validate_exit_intent, validate_interaction_count, validate_page_count,
    validate_performance_metric, validate_scroll_depth, validate_timezone_offset,
};
use crate::properties::validate_properties;
use crate::string::sanitize_str;

pub const MAX_EVENT_NAME_LENGTH: usize = 128;

/// A tracked event exactly as the client sent it. Every field the client
/// controls is kept weakly typed; sanitization narrows them afterwards.
#[derive(Default, Debug, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub session_id: Value,
    #[serde(default)]
    pub timezone: Value,
    #[serde(default)]
    pub timezone_offset: Value,
    #[serde(default)]
    pub language: Value,
    #[serde(default, alias = "href")]
    pub url: Value,
    #[serde(default)]
    pub utm_source: Value,
    #[serde(default)]
    pub utm_medium: Value,
    #[serde(default)]
    pub utm_campaign: Value,
    #[serde(default)]
    pub utm_term: Value,
    #[serde(default)]
    pub utm_content: Value,
    #[serde(default)]
    pub screen_resolution: Value,
    #[serde(default)]
    pub viewport_size: Value,
    #[serde(default)]
    pub load_time: Value,
    #[serde(default)]
    pub scroll_depth: Value,
    #[serde(default)]
    pub page_count: Value,
    #[serde(default)]
    pub interaction_count: Value,
    #[serde(default)]
    pub exit_intent: Value,
    #[serde(default)]
    pub properties: Value,
}

/// The narrow record the pipeline stores. Invalid fields arrive here as
/// their neutral sentinel, never as an error.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SanitizedEvent {
    pub event: String,
    pub session_id: String,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_offset: Option<i64>,
    pub language: String,
    pub url: String,
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub utm_term: String,
    pub utm_content: String,
    pub screen_resolution: String,
    pub viewport_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_depth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction_count: Option<i64>,
    pub exit_intent: i64,
    pub properties: HashMap<String, Value>,
    pub headers: HashMap<String, String>,
}

impl RawEvent {
    /// Runs every field through its validator and reduces the request
    /// headers to the allow-listed subset. Total for arbitrary input: a
    /// hostile payload degrades field by field instead of failing the
    /// event. Whether a neutral field (an empty `session_id`, say) rejects
    /// the whole event is the caller's decision.
    pub fn sanitize(&self, allowlist: &HeaderAllowList, headers: &HeaderMap) -> SanitizedEvent {
        SanitizedEvent {
            event: sanitize_str(&self.event, MAX_EVENT_NAME_LENGTH),
            session_id: validate_session_id(&self.session_id),
            timezone: validate_timezone(&self.timezone),
            timezone_offset: validate_timezone_offset(&self.timezone_offset),
            language: validate_language(&self.language),
            url: validate_url(&self.url),
            utm_source: validate_utm_parameter(&self.utm_source),
            utm_medium: validate_utm_parameter(&self.utm_medium),
            utm_campaign: validate_utm_parameter(&self.utm_campaign),
            utm_term: validate_utm_parameter(&self.utm_term),
            utm_content: validate_utm_parameter(&self.utm_content),
            screen_resolution: validate_screen_resolution(&self.screen_resolution),
            viewport_size: validate_viewport_size(&self.viewport_size),
            load_time: validate_performance_metric(&self.load_time),
            scroll_depth: validate_scroll_depth(&self.scroll_depth),
            page_count: validate_page_count(&self.page_count),
            interaction_count: validate_interaction_count(&self.interaction_count),
            exit_intent: validate_exit_intent(&self.exit_intent),
            properties: validate_properties(&self.properties),
            headers: filter_safe_headers(headers, allowlist),
        }
    }
}

impl SanitizedEvent {
    /// True when the client supplied a usable session identifier.
    pub fn has_session_id(&self) -> bool {
        !self.session_id.is_empty()
    }
}
