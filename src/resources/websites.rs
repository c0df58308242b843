//! Website buttons and campaigns

use super::endpoint::{Endpoint, ResourceContext, ResourceFetcher};
use crate::decode::Response;
use crate::error::Result;
use crate::models::{Button, Campaign, CampaignResult, CampaignStat, FeedbackItem};
use crate::pagination::PagedStream;
use crate::types::Params;

/// Website feedback buttons
#[derive(Clone, Debug)]
pub struct Buttons {
    ctx: ResourceContext,
    fetcher: ResourceFetcher<Button>,
}

impl Buttons {
    pub(crate) fn new(ctx: ResourceContext) -> Self {
        let fetcher = ctx.fetcher(Endpoint::Buttons);
        Self { ctx, fetcher }
    }

    /// List buttons.
    ///
    /// Accepted params: `limit`, `since` (timestamp).
    pub async fn get(&self, params: &Params) -> Result<Response<Button>> {
        self.fetcher.get(None, params).await
    }

    /// Stream every button
    pub async fn iterate(&self, params: Params) -> Result<PagedStream<Button>> {
        self.fetcher.stream(None, params).await
    }

    /// Feedback left through website buttons
    pub fn feedback(&self) -> FeedbackItems {
        FeedbackItems {
            fetcher: self.ctx.fetcher(Endpoint::ButtonFeedback),
        }
    }
}

/// Feedback items of a website button
#[derive(Clone, Debug)]
pub struct FeedbackItems {
    fetcher: ResourceFetcher<FeedbackItem>,
}

impl FeedbackItems {
    /// One page of feedback for `button_id`.
    ///
    /// Accepted params: `limit`, `since` (timestamp).
    pub async fn get(&self, button_id: &str, params: &Params) -> Result<Response<FeedbackItem>> {
        self.fetcher.get(Some(button_id), params).await
    }

    /// Stream all feedback for `button_id`, fetching further pages as the
    /// stream is drained
    pub async fn iterate(&self, button_id: &str, params: Params) -> Result<PagedStream<FeedbackItem>> {
        self.fetcher.stream(Some(button_id), params).await
    }
}

/// Website campaigns
#[derive(Clone, Debug)]
pub struct Campaigns {
    ctx: ResourceContext,
    fetcher: ResourceFetcher<Campaign>,
}

impl Campaigns {
    pub(crate) fn new(ctx: ResourceContext) -> Self {
        let fetcher = ctx.fetcher(Endpoint::Campaigns);
        Self { ctx, fetcher }
    }

    /// List campaigns.
    ///
    /// Accepted params: `limit`, `since` (timestamp).
    pub async fn get(&self, params: &Params) -> Result<Response<Campaign>> {
        self.fetcher.get(None, params).await
    }

    /// Stream every campaign
    pub async fn iterate(&self, params: Params) -> Result<PagedStream<Campaign>> {
        self.fetcher.stream(None, params).await
    }

    /// Responses collected by campaigns
    pub fn results(&self) -> CampaignResults {
        CampaignResults {
            fetcher: self.ctx.fetcher(Endpoint::CampaignResults),
        }
    }

    /// Aggregated campaign statistics
    pub fn stats(&self) -> CampaignStats {
        CampaignStats {
            fetcher: self.ctx.fetcher(Endpoint::CampaignStats),
        }
    }
}

/// Results of a campaign
#[derive(Clone, Debug)]
pub struct CampaignResults {
    fetcher: ResourceFetcher<CampaignResult>,
}

impl CampaignResults {
    pub async fn get(&self, campaign_id: &str, params: &Params) -> Result<Response<CampaignResult>> {
        self.fetcher.get(Some(campaign_id), params).await
    }

    /// Stream all results of `campaign_id`
    pub async fn iterate(
        &self,
        campaign_id: &str,
        params: Params,
    ) -> Result<PagedStream<CampaignResult>> {
        self.fetcher.stream(Some(campaign_id), params).await
    }
}

/// Statistics of a campaign
#[derive(Clone, Debug)]
pub struct CampaignStats {
    fetcher: ResourceFetcher<CampaignStat>,
}

impl CampaignStats {
    pub async fn get(&self, campaign_id: &str, params: &Params) -> Result<Response<CampaignStat>> {
        self.fetcher.get(Some(campaign_id), params).await
    }

    /// Stream all statistics entries of `campaign_id`
    pub async fn iterate(
        &self,
        campaign_id: &str,
        params: Params,
    ) -> Result<PagedStream<CampaignStat>> {
        self.fetcher.stream(Some(campaign_id), params).await
    }
}
