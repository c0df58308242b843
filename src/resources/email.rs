//! Email buttons

use super::endpoint::{Endpoint, ResourceContext, ResourceFetcher};
use crate::decode::Response;
use crate::error::Result;
use crate::models::{EmailButton, FeedbackItem};
use crate::pagination::PagedStream;
use crate::types::Params;

/// Feedback buttons embedded in emails
#[derive(Clone, Debug)]
pub struct EmailButtons {
    ctx: ResourceContext,
    fetcher: ResourceFetcher<EmailButton>,
}

impl EmailButtons {
    pub(crate) fn new(ctx: ResourceContext) -> Self {
        let fetcher = ctx.fetcher(Endpoint::EmailButtons);
        Self { ctx, fetcher }
    }

    /// List email buttons.
    ///
    /// Accepted params: `limit`, `since` (timestamp).
    pub async fn get(&self, params: &Params) -> Result<Response<EmailButton>> {
        self.fetcher.get(None, params).await
    }

    pub async fn iterate(&self, params: Params) -> Result<PagedStream<EmailButton>> {
        self.fetcher.stream(None, params).await
    }

    /// Feedback left through email buttons
    pub fn feedback(&self) -> EmailFeedbackItems {
        EmailFeedbackItems {
            fetcher: self.ctx.fetcher(Endpoint::EmailButtonFeedback),
        }
    }
}

/// Feedback items of an email button.
///
/// Same payload as website feedback, without the screenshot.
#[derive(Clone, Debug)]
pub struct EmailFeedbackItems {
    fetcher: ResourceFetcher<FeedbackItem>,
}

impl EmailFeedbackItems {
    pub async fn get(&self, button_id: &str, params: &Params) -> Result<Response<FeedbackItem>> {
        self.fetcher.get(Some(button_id), params).await
    }

    /// Stream all feedback for email button `button_id`
    pub async fn iterate(&self, button_id: &str, params: Params) -> Result<PagedStream<FeedbackItem>> {
        self.fetcher.stream(Some(button_id), params).await
    }
}
