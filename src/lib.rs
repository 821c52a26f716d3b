pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::perplexity::PerplexityGenerator;
pub use adapters::twitter::TwitterPublisher;
pub use config::BotConfig;
pub use crate::core::bot::BotEngine;
pub use domain::model::{Credentials, Schedule};
pub use utils::error::{BotError, Result};
