pub mod oauth;
pub mod perplexity;
pub mod twitter;
