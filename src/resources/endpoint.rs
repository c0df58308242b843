//! URI templates and the generic page fetcher behind every accessor

use crate::decode::{decode_response, Response};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::pagination::{Page, PageFetcher, PagedStream};
use crate::types::{Params, LIMIT_PARAM};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

const BUTTONS: &str = "/live/websites/button";
const CAMPAIGNS: &str = "/live/websites/campaign";
const APPS: &str = "/live/apps";
const EMAIL_BUTTONS: &str = "/live/email/button";

/// An API endpoint returning a list envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Buttons,
    ButtonFeedback,
    Campaigns,
    CampaignResults,
    CampaignStats,
    Apps,
    AppFeedback,
    EmailButtons,
    EmailButtonFeedback,
}

impl Endpoint {
    /// Collection root and, for nested endpoints, the child collection
    fn parts(self) -> (&'static str, Option<&'static str>) {
        match self {
            Self::Buttons => (BUTTONS, None),
            Self::ButtonFeedback => (BUTTONS, Some("feedback")),
            Self::Campaigns => (CAMPAIGNS, None),
            Self::CampaignResults => (CAMPAIGNS, Some("results")),
            Self::CampaignStats => (CAMPAIGNS, Some("stats")),
            Self::Apps => (APPS, None),
            Self::AppFeedback => (APPS, Some("feedback")),
            Self::EmailButtons => (EMAIL_BUTTONS, None),
            Self::EmailButtonFeedback => (EMAIL_BUTTONS, Some("feedback")),
        }
    }

    /// Render the request path
    pub fn path(self, resource_id: Option<&str>) -> Result<Cow<'static, str>> {
        let (root, child) = self.parts();
        let Some(child) = child else {
            return Ok(Cow::Borrowed(root));
        };
        let id = validate_id(resource_id)?;
        Ok(Cow::Owned(format!("{root}/{id}/{child}")))
    }
}

/// An id must stay a single path segment once joined onto the API root.
///
/// Dot segments, separators (including `\`, which URL parsing treats as `/`)
/// and percent escapes (`%2e%2e` is a dot segment too) are rejected.
fn validate_id(resource_id: Option<&str>) -> Result<&str> {
    let id = resource_id.ok_or_else(|| Error::missing_field("resource_id"))?;
    let bad_char = |c: char| {
        matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control()
    };
    if id.is_empty() || id == "." || id == ".." || id.contains(bad_char) {
        return Err(Error::invalid_value("resource_id", format!("'{id}' is not a valid id")));
    }
    Ok(id)
}

/// Fetches pages of `T` from one endpoint
pub struct ResourceFetcher<T> {
    transport: Arc<dyn Transport>,
    endpoint: Endpoint,
    default_limit: Option<u32>,
    _item: PhantomData<fn() -> T>,
}

impl<T> ResourceFetcher<T> {
    pub fn new(transport: Arc<dyn Transport>, endpoint: Endpoint) -> Self {
        Self {
            transport,
            endpoint,
            default_limit: None,
            _item: PhantomData,
        }
    }

    /// Send `limit` with requests that do not set one
    #[must_use]
    pub fn with_default_limit(mut self, limit: Option<u32>) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    fn effective_params<'a>(&self, params: &'a Params) -> Cow<'a, Params> {
        match self.default_limit {
            Some(limit) if params.get(LIMIT_PARAM).is_none() => {
                Cow::Owned(params.clone().limit(limit))
            }
            _ => Cow::Borrowed(params),
        }
    }
}

impl<T: DeserializeOwned> ResourceFetcher<T> {
    /// Fetch and decode one page
    pub async fn get(&self, resource_id: Option<&str>, params: &Params) -> Result<Response<T>> {
        let path = self.endpoint.path(resource_id)?;
        let params = self.effective_params(params);
        let body = self.transport.get(&path, &params).await?;
        decode_response(&body)
    }
}

impl<T: DeserializeOwned + Send + 'static> ResourceFetcher<T> {
    /// Stream every item of the endpoint starting from `params`
    pub async fn stream(&self, resource_id: Option<&str>, params: Params) -> Result<PagedStream<T>> {
        PagedStream::open(self.clone(), resource_id, params).await
    }
}

#[async_trait]
impl<T: DeserializeOwned + Send> PageFetcher<T> for ResourceFetcher<T> {
    async fn fetch(&self, resource_id: Option<&str>, params: &Params) -> Result<Page<T>> {
        Ok(self.get(resource_id, params).await?.into())
    }
}

impl<T> Clone for ResourceFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoint: self.endpoint,
            default_limit: self.default_limit,
            _item: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ResourceFetcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceFetcher")
            .field("endpoint", &self.endpoint)
            .field("default_limit", &self.default_limit)
            .finish_non_exhaustive()
    }
}

/// What every accessor is built from: the shared transport and defaults.
///
/// Read-only once the client is built; every stream opened through it shares
/// the same credentials.
#[derive(Clone)]
pub(crate) struct ResourceContext {
    transport: Arc<dyn Transport>,
    page_limit: Option<u32>,
}

impl ResourceContext {
    pub(crate) fn new(transport: Arc<dyn Transport>, page_limit: Option<u32>) -> Self {
        Self {
            transport,
            page_limit,
        }
    }

    pub(crate) fn fetcher<T>(&self, endpoint: Endpoint) -> ResourceFetcher<T> {
        ResourceFetcher::new(Arc::clone(&self.transport), endpoint)
            .with_default_limit(self.page_limit)
    }
}

impl fmt::Debug for ResourceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceContext")
            .field("page_limit", &self.page_limit)
            .finish_non_exhaustive()
    }
}
