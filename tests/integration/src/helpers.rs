//! Test helper utilities for integration tests

use ai_stats_sdk::{Client, Params, Transport};
use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

/// Initialize tracing for tests (only once)
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
});

/// Initialize tracing for tests
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Build a parameter map from string pairs.
pub fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Transport pointed at `base_url` with the given default headers.
pub fn transport(base_url: &str, default_headers: &[(&str, &str)]) -> Transport {
    Transport::new(base_url, &params(default_headers), reqwest::Client::new())
        .expect("valid transport")
}

/// Typed client authenticated with a fixed test key.
pub fn client(base_url: &str) -> Client {
    Client::builder()
        .base_url(base_url)
        .api_key(TEST_API_KEY)
        .build()
        .expect("valid client")
}

/// API key used by [`client`].
pub const TEST_API_KEY: &str = "sk-test-0123456789";
