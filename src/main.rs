use tweet_loop::utils::{logger, validation::Validate};
use tweet_loop::{BotConfig, BotEngine, PerplexityGenerator, TwitterPublisher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logger::init_logger();

    tracing::info!("Starting tweet-loop");

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        "📅 Posting {} times/day between {}:00 and {}:00 (every {} minutes)",
        config.schedule.posts_per_day,
        config.schedule.start_hour,
        config.schedule.end_hour,
        config.schedule.interval_minutes()
    );

    let generator = PerplexityGenerator::new(
        config.perplexity_api_key.clone(),
        config.completion_endpoint.clone(),
    );
    let publisher = TwitterPublisher::new(
        config.credentials.clone(),
        config.publish_endpoint.clone(),
    );

    let engine = BotEngine::new(config.schedule, generator, publisher);
    engine.run().await;

    Ok(())
}
