//! Resource accessors
//!
//! One accessor per resource family of the API. Listing endpoints return a
//! single decoded page through `get`; families whose items span many pages
//! also expose `iterate`, which returns a [`PagedStream`](crate::pagination::PagedStream)
//! over every item.
//!
//! | Accessor           | Path                                       |
//! |--------------------|--------------------------------------------|
//! | `Buttons`          | `/live/websites/button`                    |
//! | `FeedbackItems`    | `/live/websites/button/{id}/feedback`      |
//! | `Campaigns`        | `/live/websites/campaign`                  |
//! | `CampaignResults`  | `/live/websites/campaign/{id}/results`     |
//! | `CampaignStats`    | `/live/websites/campaign/{id}/stats`       |
//! | `Apps`             | `/live/apps`                               |
//! | `AppFeedbackItems` | `/live/apps/{id}/feedback`                 |
//! | `EmailButtons`     | `/live/email/button`                       |
//! | `EmailFeedbackItems` | `/live/email/button/{id}/feedback`       |

mod apps;
mod email;
mod endpoint;
mod websites;

pub use apps::{AppFeedbackItems, Apps};
pub use email::{EmailButtons, EmailFeedbackItems};
pub use endpoint::{Endpoint, ResourceFetcher};
pub(crate) use endpoint::ResourceContext;
pub use websites::{Buttons, CampaignResults, CampaignStats, Campaigns, FeedbackItems};
