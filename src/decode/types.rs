//! Response envelope and decoding

use crate::error::{Error, Result};
use crate::pagination::Page;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One decoded list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    /// Items on this page, in server order
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Number of items on this page as reported by the server
    #[serde(default)]
    pub count: u64,
    /// Whether another page can be requested
    #[serde(default)]
    pub has_more: bool,
    /// Watermark to pass as `since` for the next page
    #[serde(default)]
    pub last_timestamp: i64,
}

impl<T> From<Response<T>> for Page<T> {
    fn from(response: Response<T>) -> Self {
        Page::new(response.items, response.has_more, response.last_timestamp)
    }
}

/// Decode a raw response body
pub fn decode_response<T: DeserializeOwned>(body: &[u8]) -> Result<Response<T>> {
    serde_json::from_slice(body).map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))
}
