//! Website buttons and campaigns

use crate::types::{JsonObject, JsonValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A feedback button placed on a website
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A feedback item left through a website or email button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    pub id: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub custom: JsonObject,
    #[serde(default)]
    pub email: Option<String>,
    /// Base64 screenshot; never present for email feedback
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub nps: Option<i32>,
    #[serde(default)]
    pub public_url: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub button_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A website campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub button_id: Option<String>,
    #[serde(default)]
    pub analytics_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// One response to a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResult {
    pub id: String,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub custom_data: JsonObject,
    #[serde(default)]
    pub data: JsonObject,
    #[serde(default)]
    pub url: Option<String>,
    /// Time spent on the campaign, in milliseconds
    #[serde(default)]
    pub time: Option<f64>,
}

/// Aggregated statistics of a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStat {
    pub id: String,
    #[serde(default)]
    pub completed: Option<u64>,
    #[serde(default)]
    pub conversion: Option<f64>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, JsonValue>,
}
