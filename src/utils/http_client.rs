use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create a configured HTTP client for talking to the vision API
pub fn create_http_client() -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(60))
        .user_agent("nutrifit/1.0.0")
        .build()
        .expect("Failed to create HTTP client")
}
