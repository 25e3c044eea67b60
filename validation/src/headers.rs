use std::collections::{HashMap, HashSet};

use http::HeaderMap;

use crate::string::sanitize_str;

pub const MAX_HEADER_VALUE_LENGTH: usize = 255;

// Request headers retained for storage. Everything else, cookies and
// authorization in particular, is dropped before the event leaves the
// handler.
const DEFAULT_SAFE_HEADERS: [&str; 15] = [
    "accept-encoding",
    "accept-language",
    "cf-connecting-ip",
    "cf-ipcountry",
    "content-type",
    "dnt",
    "host",
    "origin",
    "referer",
    "sec-ch-ua",
    "sec-ch-ua-mobile",
    "sec-ch-ua-platform",
    "user-agent",
    "x-forwarded-for",
    "x-real-ip",
];

/// Closed set of header names a deployment is willing to store. Comparison
/// is case-insensitive. Built once at service startup and passed down to the
/// request path, so a deployment can extend or restrict the set without
/// touching this crate.
#[derive(Debug, Clone)]
pub struct HeaderAllowList {
    names: HashSet<String>,
}

impl Default for HeaderAllowList {
    fn default() -> Self {
        Self::from_names(DEFAULT_SAFE_HEADERS)
    }
}

impl HeaderAllowList {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn allows(&self, name: &str) -> bool {
        self.names.contains(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Reduces a raw header map to the allow-listed subset, with each retained
/// value sanitized and capped. Headers with non-UTF-8 values or values that
/// sanitize to nothing are dropped along with everything outside the list.
pub fn filter_safe_headers(
    headers: &HeaderMap,
    allowlist: &HeaderAllowList,
) -> HashMap<String, String> {
    let mut safe = HashMap::new();
    for (name, value) in headers {
        // HeaderName is already lower-cased by the http crate.
        if !allowlist.allows(name.as_str()) {
            continue;
        }
        let Ok(value) = value.to_str() else {
            continue;
        };
        let sanitized = sanitize_str(value, MAX_HEADER_VALUE_LENGTH);
        if sanitized.is_empty() {
            continue;
        }
        safe.insert(name.as_str().to_string(), sanitized);
    }
    safe
}
