//! Pagination types and traits

use crate::error::Result;
use crate::types::Params;
use async_trait::async_trait;
use std::sync::Arc;

/// One fetched batch of items
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    has_more: bool,
    cursor: i64,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, has_more: bool, cursor: i64) -> Self {
        Self {
            items,
            has_more,
            cursor,
        }
    }

    /// Create the final page of a result set
    pub fn last(items: Vec<T>, cursor: i64) -> Self {
        Self::new(items, false, cursor)
    }

    /// Items in server order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether another page follows
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Watermark to request the next page with
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Split into items and continuation
    pub fn into_parts(self) -> (Vec<T>, bool, i64) {
        (self.items, self.has_more, self.cursor)
    }
}

/// Fetches a single page of a resource family.
///
/// `resource_id` is the parent resource (a button, campaign or app id) and is
/// `None` for top-level listings. Every call performs exactly one request.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    /// Fetch one page
    async fn fetch(&self, resource_id: Option<&str>, params: &Params) -> Result<Page<T>>;
}

#[async_trait]
impl<T, F> PageFetcher<T> for Arc<F>
where
    F: PageFetcher<T> + ?Sized,
{
    async fn fetch(&self, resource_id: Option<&str>, params: &Params) -> Result<Page<T>> {
        (**self).fetch(resource_id, params).await
    }
}

/// Everything one running stream needs to request its next page.
///
/// Owned by the stream's worker and never shared.
#[derive(Debug)]
pub struct StreamState<F> {
    fetcher: F,
    resource_id: Option<String>,
    params: Params,
    cursor: Option<i64>,
}

impl<F> StreamState<F> {
    /// Create state for a stream starting from `params`
    pub fn new(fetcher: F, resource_id: Option<&str>, params: Params) -> Self {
        Self {
            fetcher,
            resource_id: resource_id.map(ToString::to_string),
            params,
            cursor: None,
        }
    }

    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    /// Parameters the next fetch will be sent with
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Last watermark the stream moved to, if any page has been drained
    pub fn cursor(&self) -> Option<i64> {
        self.cursor
    }

    /// Move to `cursor`: the next fetch asks for items since it.
    ///
    /// Only call once every item of the page that returned `cursor` has been
    /// delivered. Every other parameter is left as it is.
    pub fn advance(&mut self, cursor: i64) {
        self.params.set_since(cursor);
        self.cursor = Some(cursor);
    }

    /// Fetch the page the current parameters point at
    pub async fn fetch<T>(&self) -> Result<Page<T>>
    where
        F: PageFetcher<T>,
    {
        self.fetcher
            .fetch(self.resource_id.as_deref(), &self.params)
            .await
    }
}
