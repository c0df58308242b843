//! Common types used throughout the client
//!
//! Shared type aliases and the query parameter map every resource accepts.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameter carrying the maximum number of items per page
pub const LIMIT_PARAM: &str = "limit";

/// Query parameter carrying the pagination watermark
pub const SINCE_PARAM: &str = "since";

/// Filter parameters sent with every list request.
///
/// The API recognizes `limit` and `since`; anything else is passed through
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(StringMap);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.0.insert(LIMIT_PARAM.to_string(), limit.to_string());
        self
    }

    /// Set the watermark from a raw timestamp
    #[must_use]
    pub fn since(mut self, timestamp: i64) -> Self {
        self.set_since(timestamp);
        self
    }

    /// Set the watermark from a point in time (milliseconds since the epoch)
    #[must_use]
    pub fn since_time(self, time: DateTime<Utc>) -> Self {
        self.since(time.timestamp_millis())
    }

    /// Add an arbitrary parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Overwrite the watermark in place
    pub fn set_since(&mut self, timestamp: i64) {
        self.0.insert(SINCE_PARAM.to_string(), timestamp.to_string());
    }

    /// Look up a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate over all parameters
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &StringMap {
        &self.0
    }
}

impl From<StringMap> for Params {
    fn from(map: StringMap) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
