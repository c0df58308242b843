//! Transport trait

use crate::error::Result;
use crate::types::Params;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

/// Performs an authenticated GET and returns the raw response body.
///
/// Implementations map a network failure to `Error::Http` and a non-success
/// status to `Error::HttpStatus`. Timeouts are the transport's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `uri` (a path relative to the API root) with `params` as the query string
    async fn get(&self, uri: &str, params: &Params) -> Result<Bytes>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, uri: &str, params: &Params) -> Result<Bytes> {
        (**self).get(uri, params).await
    }
}
