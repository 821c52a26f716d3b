use crate::adapters::{perplexity, twitter};
use crate::domain::model::{Credentials, Schedule};
use crate::utils::error::{BotError, Result};
use crate::utils::validation::{
    validate_hour, validate_positive_number, validate_required, validate_url, Validate,
};

/// Process-lifetime configuration, read once from the environment at
/// startup and passed explicitly to the collaborators.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub credentials: Credentials,
    pub perplexity_api_key: String,
    pub schedule: Schedule,
    pub completion_endpoint: String,
    pub publish_endpoint: String,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            credentials: Credentials {
                app_key: require_var("APP_KEY")?,
                app_secret: require_var("APP_SECRET")?,
                access_token: require_var("ACCESS_TOKEN")?,
                access_secret: require_var("ACCESS_SECRET")?,
            },
            perplexity_api_key: require_var("PPLX_KEY")?,
            schedule: Schedule::default(),
            completion_endpoint: perplexity::DEFAULT_COMPLETION_ENDPOINT.to_string(),
            publish_endpoint: twitter::DEFAULT_PUBLISH_ENDPOINT.to_string(),
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| BotError::ConfigError {
        message: format!("{} is not set", name),
    })
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<()> {
        validate_required("APP_KEY", &self.credentials.app_key)?;
        validate_required("APP_SECRET", &self.credentials.app_secret)?;
        validate_required("ACCESS_TOKEN", &self.credentials.access_token)?;
        validate_required("ACCESS_SECRET", &self.credentials.access_secret)?;
        validate_required("PPLX_KEY", &self.perplexity_api_key)?;

        validate_url("completion_endpoint", &self.completion_endpoint)?;
        validate_url("publish_endpoint", &self.publish_endpoint)?;

        validate_hour("start_hour", self.schedule.start_hour)?;
        validate_hour("end_hour", self.schedule.end_hour)?;
        if self.schedule.start_hour > self.schedule.end_hour {
            return Err(BotError::InvalidConfigValueError {
                field: "start_hour".to_string(),
                value: self.schedule.start_hour.to_string(),
                reason: "start_hour must not be after end_hour".to_string(),
            });
        }

        validate_positive_number("posts_per_day", self.schedule.posts_per_day, 1)?;
        let window_minutes = (self.schedule.end_hour - self.schedule.start_hour) * 60;
        if window_minutes < self.schedule.posts_per_day {
            return Err(BotError::InvalidConfigValueError {
                field: "posts_per_day".to_string(),
                value: self.schedule.posts_per_day.to_string(),
                reason: "posting window is too small for this many posts".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> BotConfig {
        BotConfig {
            credentials: Credentials {
                app_key: "k".to_string(),
                app_secret: "s".to_string(),
                access_token: "t".to_string(),
                access_secret: "ts".to_string(),
            },
            perplexity_api_key: "pplx".to_string(),
            schedule: Schedule::default(),
            completion_endpoint: perplexity::DEFAULT_COMPLETION_ENDPOINT.to_string(),
            publish_endpoint: twitter::DEFAULT_PUBLISH_ENDPOINT.to_string(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_empty_credential_rejected() {
        let mut config = valid_config();
        config.credentials.app_secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_window_rejected() {
        let mut config = valid_config();
        config.schedule.start_hour = 23;
        config.schedule.end_hour = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_posts_rejected() {
        let mut config = valid_config();
        config.schedule.posts_per_day = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overcrowded_window_rejected() {
        let mut config = valid_config();
        config.schedule.start_hour = 9;
        config.schedule.end_hour = 10;
        config.schedule.posts_per_day = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let mut config = valid_config();
        config.completion_endpoint = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_reports_missing_variable() {
        std::env::remove_var("APP_KEY");
        let result = BotConfig::from_env();
        match result {
            Err(BotError::ConfigError { message }) => {
                assert!(message.contains("APP_KEY"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
