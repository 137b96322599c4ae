//! The seam between the concierge and whatever generates its replies.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChefError {
    #[error("http error: {0}")]
    Http(String),
    #[error("response error: {0}")]
    Response(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A text model that answers one prompt.
///
/// `Ok(None)` means the model answered with nothing usable; the concierge turns that into
/// its "say again" reply instead of an error.
#[async_trait]
pub trait RecommendationModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, ChefError>;
}
