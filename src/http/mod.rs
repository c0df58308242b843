//! HTTP transport module
//!
//! Provides the signed GET capability every resource fetch goes through.
//!
//! # Overview
//!
//! - `Transport` - the seam between resources and the network; anything that
//!   can answer a GET with raw bytes can stand in for the real client
//! - `HttpClient` - reqwest-backed implementation with base URL handling,
//!   default headers and authentication

mod client;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, DEFAULT_BASE_URL};
pub use transport::Transport;

#[cfg(test)]
mod tests;
