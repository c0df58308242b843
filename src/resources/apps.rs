//! Mobile apps

use super::endpoint::{Endpoint, ResourceContext, ResourceFetcher};
use crate::decode::Response;
use crate::error::Result;
use crate::models::{App, AppFeedbackItem};
use crate::pagination::PagedStream;
use crate::types::Params;

/// Apps registered for in-app feedback
#[derive(Clone, Debug)]
pub struct Apps {
    ctx: ResourceContext,
    fetcher: ResourceFetcher<App>,
}

impl Apps {
    pub(crate) fn new(ctx: ResourceContext) -> Self {
        let fetcher = ctx.fetcher(Endpoint::Apps);
        Self { ctx, fetcher }
    }

    /// List apps.
    ///
    /// Accepted params: `limit`, `since` (timestamp).
    pub async fn get(&self, params: &Params) -> Result<Response<App>> {
        self.fetcher.get(None, params).await
    }

    pub async fn iterate(&self, params: Params) -> Result<PagedStream<App>> {
        self.fetcher.stream(None, params).await
    }

    /// Feedback submitted from inside apps
    pub fn feedback(&self) -> AppFeedbackItems {
        AppFeedbackItems {
            fetcher: self.ctx.fetcher(Endpoint::AppFeedback),
        }
    }
}

/// In-app feedback of one app
#[derive(Clone, Debug)]
pub struct AppFeedbackItems {
    fetcher: ResourceFetcher<AppFeedbackItem>,
}

impl AppFeedbackItems {
    pub async fn get(&self, app_id: &str, params: &Params) -> Result<Response<AppFeedbackItem>> {
        self.fetcher.get(Some(app_id), params).await
    }

    /// Stream all feedback of `app_id`
    pub async fn iterate(&self, app_id: &str, params: Params) -> Result<PagedStream<AppFeedbackItem>> {
        self.fetcher.stream(Some(app_id), params).await
    }
}
