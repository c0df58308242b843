//! Top-level client

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, Transport};
use crate::resources::{Apps, Buttons, Campaigns, EmailButtons, ResourceContext};
use std::sync::Arc;

/// Entry point to the API.
///
/// Cheap to clone; clones share one transport.
#[derive(Clone, Debug)]
pub struct Usabilla {
    ctx: ResourceContext,
}

impl Usabilla {
    /// Client for the production API with the given key pair
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        Self::with_config(&ClientConfig::new(access_key, secret_key))
    }

    /// Client built from a validated configuration
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::new(config.http_client_config(), config.credentials())?;
        Ok(Self::from_parts(Arc::new(http), config.page_limit))
    }

    /// Client built from environment variables, see [`ClientConfig::from_env`]
    pub fn from_env() -> Result<Self> {
        Self::with_config(&ClientConfig::from_env()?)
    }

    /// Client over a custom transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self::from_parts(transport, None)
    }

    fn from_parts(transport: Arc<dyn Transport>, page_limit: Option<u32>) -> Self {
        Self {
            ctx: ResourceContext::new(transport, page_limit),
        }
    }

    /// Website buttons and their feedback
    pub fn buttons(&self) -> Buttons {
        Buttons::new(self.ctx.clone())
    }

    /// Website campaigns, their results and statistics
    pub fn campaigns(&self) -> Campaigns {
        Campaigns::new(self.ctx.clone())
    }

    /// Apps and in-app feedback
    pub fn apps(&self) -> Apps {
        Apps::new(self.ctx.clone())
    }

    /// Email buttons and their feedback
    pub fn email_buttons(&self) -> EmailButtons {
        EmailButtons::new(self.ctx.clone())
    }
}
