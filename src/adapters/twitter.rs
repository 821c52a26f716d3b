use crate::adapters::oauth;
use crate::domain::model::Credentials;
use crate::domain::ports::Publisher;
use crate::utils::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Serialize;

pub const DEFAULT_PUBLISH_ENDPOINT: &str = "https://api.twitter.com/2/tweets";

#[derive(Debug, Serialize)]
struct TweetRequest<'a> {
    text: &'a str,
}

/// Posts plain text to the account's timeline via POST /2/tweets.
pub struct TwitterPublisher {
    client: Client,
    credentials: Credentials,
    endpoint: String,
}

impl TwitterPublisher {
    pub fn new(credentials: Credentials, endpoint: String) -> Self {
        Self {
            client: Client::new(),
            credentials,
            endpoint,
        }
    }
}

#[async_trait]
impl Publisher for TwitterPublisher {
    async fn publish(&self, text: &str) -> Result<()> {
        let authorization = oauth::signed_header("POST", &self.endpoint, &self.credentials)?;

        tracing::debug!("Posting tweet to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, authorization)
            .json(&TweetRequest { text })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Publish response status: {}", status);
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BotError::PublishError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
