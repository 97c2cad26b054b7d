use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Listener
    pub host: String,
    pub port: u16,

    // Translation engine
    pub engine_url: String,
    pub engine_timeout_secs: u64,

    // Routing
    pub pivot_language: String,

    // Optional API key for the translate endpoint
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("Invalid PORT value: {}", value))?,
                Err(_) => 5100,
            },

            engine_url: std::env::var("ENGINE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5200".to_string()),
            engine_timeout_secs: match std::env::var("ENGINE_TIMEOUT_SECS") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("Invalid ENGINE_TIMEOUT_SECS value: {}", value))?,
                Err(_) => 120,
            },

            pivot_language: std::env::var("PIVOT_LANGUAGE").unwrap_or_else(|_| "en".to_string()),

            api_key: std::env::var("API_KEY").ok().filter(|key| !key.is_empty()),
        })
    }
}
