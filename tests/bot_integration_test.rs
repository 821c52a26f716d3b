use httpmock::prelude::*;
use tweet_loop::adapters::perplexity::FALLBACK_TWEET;
use tweet_loop::{BotEngine, Credentials, PerplexityGenerator, Schedule, TwitterPublisher};

fn test_credentials() -> Credentials {
    Credentials {
        app_key: "app-key".to_string(),
        app_secret: "app-secret".to_string(),
        access_token: "access-token".to_string(),
        access_secret: "access-secret".to_string(),
    }
}

fn engine_for(server: &MockServer) -> BotEngine<PerplexityGenerator, TwitterPublisher> {
    let generator =
        PerplexityGenerator::new("test-key".to_string(), server.url("/chat/completions"));
    let publisher = TwitterPublisher::new(test_credentials(), server.url("/2/tweets"));
    BotEngine::new(Schedule::default(), generator, publisher)
}

#[tokio::test]
async fn test_cycle_generates_then_publishes() {
    let server = MockServer::start();

    let completion_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/chat/completions")
            .header("authorization", "Bearer test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "Automate the boring parts 🤖"}}
                ]
            }));
    });

    let tweet_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/2/tweets")
            .header_exists("authorization")
            .json_body(serde_json::json!({"text": "Automate the boring parts 🤖"}));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"data": {"id": "1"}}));
    });

    engine_for(&server).post_once().await;

    completion_mock.assert();
    tweet_mock.assert();
}

#[tokio::test]
async fn test_generator_failure_still_publishes_fallback() {
    let server = MockServer::start();

    let completion_mock = server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(502);
    });

    // The fallback string must arrive at the publish endpoint verbatim.
    let tweet_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/2/tweets")
            .json_body(serde_json::json!({"text": FALLBACK_TWEET}));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"data": {"id": "2"}}));
    });

    engine_for(&server).post_once().await;

    completion_mock.assert();
    tweet_mock.assert();
}

#[tokio::test]
async fn test_publish_failure_does_not_bring_down_the_loop() {
    let server = MockServer::start();

    let completion_mock = server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "still here"}}]
            }));
    });

    let tweet_mock = server.mock(|when, then| {
        when.method(POST).path("/2/tweets");
        then.status(429).body("Too Many Requests");
    });

    let engine = engine_for(&server);
    engine.post_once().await;
    // A second cycle after the failure proves the engine is still usable.
    engine.post_once().await;

    assert_eq!(completion_mock.hits(), 2);
    assert_eq!(tweet_mock.hits(), 2);
}
