// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # Usabilla API client
//!
//! Async client for the Usabilla feedback API: buttons, campaigns, campaign
//! results and statistics, apps and email buttons.
//!
//! ## Features
//!
//! - **Typed resources**: one accessor per resource family, serde-decoded items
//! - **Transparent pagination**: `iterate` turns the API's `since` watermark
//!   pagination into a lazy stream that fetches the next page only once the
//!   current one is drained
//! - **Explicit failure**: a failed page fetch ends the stream with an `Err`
//!   item instead of silently stopping
//! - **Cancellation**: streams can be stopped early, and dropping one stops
//!   its background worker
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use usabilla::{Params, Result, Usabilla};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Usabilla::new("access-key", "secret-key")?;
//!
//!     let buttons = client.buttons().get(&Params::new()).await?;
//!     for button in &buttons.items {
//!         let mut feedback = client
//!             .buttons()
//!             .feedback()
//!             .iterate(&button.id, Params::new().limit(100))
//!             .await?;
//!         while let Some(item) = feedback.next().await {
//!             println!("{:?}", item?.comment);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Usabilla                             │
//! │  buttons()  campaigns()  apps()  email_buttons()             │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │  get() / iterate()
//! ┌──────────────┬───────────────┴──────┬────────────┬──────────┐
//! │  Resources   │  Pagination          │  Decode    │  HTTP    │
//! ├──────────────┼──────────────────────┼────────────┼──────────┤
//! │ Endpoint     │ PageFetcher          │ Response   │Transport │
//! │ Fetcher      │ PagedStream (worker) │ Models     │ Auth     │
//! └──────────────┴──────────────────────┴────────────┴──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and query parameters
pub mod types;

/// Authentication
pub mod auth;

/// HTTP transport
pub mod http;

/// Response envelope decoding
pub mod decode;

/// Resource item payloads
pub mod models;

/// Paginated-to-stream adapter
pub mod pagination;

/// Resource accessors
pub mod resources;

/// Client configuration
pub mod config;

/// Top-level client
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Usabilla;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{CancelHandle, Page, PageFetcher, PagedStream};
pub use types::Params;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
