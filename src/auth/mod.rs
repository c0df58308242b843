//! Authentication module
//!
//! The `Authenticator` decorates every outgoing request with the configured
//! credentials. Credentials are read-only once the client is built and are
//! shared by every stream the client opens.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{Credentials, ACCESS_KEY_HEADER, SECRET_KEY_HEADER};
