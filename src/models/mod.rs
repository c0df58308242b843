//! Resource item payloads
//!
//! Field names follow the API's camelCase JSON. Everything except the id is
//! optional because the service omits fields it has no value for; unknown
//! fields are ignored.

mod apps;
mod email;
mod websites;

pub use apps::{App, AppFeedbackItem, GeoLocation};
pub use email::EmailButton;
pub use websites::{Button, Campaign, CampaignResult, CampaignStat, FeedbackItem};

#[cfg(test)]
mod tests;
