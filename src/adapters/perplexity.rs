use crate::domain::ports::ContentGenerator;
use crate::utils::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPLETION_ENDPOINT: &str = "https://api.perplexity.ai/chat/completions";

/// Posted verbatim whenever the remote call fails in any way.
pub const FALLBACK_TWEET: &str = "Perplexity glitched! Still, keep building and sharing 💡";

const MODEL: &str = "llama-3.1-sonar-small-128k-online";
const SYSTEM_PROMPT: &str = "Be precise and concise.";
const USER_PROMPT: &str = "Write a unique, under 280 character tweet about AI tools, \
     web development, or SaaS insights. It should be useful or witty. Add emojis. \
     Don't be vague.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Generates tweet text through the Perplexity chat-completions API.
///
/// The 280-character limit is only suggested to the model, never enforced
/// locally.
pub struct PerplexityGenerator {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl PerplexityGenerator {
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            endpoint,
        }
    }

    async fn request_completion(&self) -> Result<String> {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: USER_PROMPT,
                },
            ],
            max_tokens: 550,
            temperature: 0.2,
        };

        tracing::debug!("Requesting completion from: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Completion response status: {}", status);
        if !status.is_success() {
            return Err(BotError::GenerationError {
                message: format!("completion endpoint returned {}", status),
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let tweet = parsed
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .unwrap_or_default();

        if tweet.is_empty() {
            return Err(BotError::GenerationError {
                message: "no tweet returned".to_string(),
            });
        }

        Ok(tweet)
    }
}

#[async_trait]
impl ContentGenerator for PerplexityGenerator {
    async fn generate(&self) -> String {
        match self.request_completion().await {
            Ok(tweet) => tweet,
            Err(e) => {
                tracing::error!("❌ Perplexity API error: {}", e);
                FALLBACK_TWEET.to_string()
            }
        }
    }
}
