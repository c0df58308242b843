//! Pagination module
//!
//! Turns the API's `since`-watermark pagination into a lazy stream of items.
//!
//! # Overview
//!
//! - `Page` - one fetched batch plus its continuation flag and watermark
//! - `PageFetcher` - fetches exactly one page for a resource
//! - `PagedStream` - drives a `PageFetcher` from a background worker and
//!   hands items to the consumer one at a time, fetching the next page only
//!   once the current one has been fully drained
//!
//! ```rust,ignore
//! let mut stream = PagedStream::open(fetcher, Some("button-id"), Params::new().limit(100)).await?;
//! while let Some(item) = stream.next().await {
//!     let item = item?;
//!     // ...
//! }
//! ```

mod stream;
mod types;

pub use stream::{CancelHandle, PagedStream};
pub use types::{Page, PageFetcher, StreamState};
