use crate::utils::error::Result;
use async_trait::async_trait;

/// Produces one piece of tweet text per call. Never fails: remote errors
/// degrade to a canned fallback inside the implementation.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self) -> String;
}

#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, text: &str) -> Result<()>;
}
