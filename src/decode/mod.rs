//! Response decoder module
//!
//! Every list endpoint answers with the same envelope:
//!
//! ```json
//! { "items": [...], "count": 2, "hasMore": true, "lastTimestamp": 1419340238645 }
//! ```
//!
//! Only the item payload differs between resources, so one generic
//! `Response<T>` covers them all.

mod types;

pub use types::{decode_response, Response};

#[cfg(test)]
mod tests;
