use serde::Deserialize;
use std::env;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub vision_api_base: String,
    pub vision_api_key: Option<String>,
    pub vision_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://nutrifit.db?mode=rwc".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            vision_api_base: env::var("VISION_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            vision_api_key: env::var("VISION_API_KEY").ok().filter(|key| !key.is_empty()),
            vision_model: env::var("VISION_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        })
    }
}
