use domain::ask::ASK_PATH;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8001";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    /// Upper bound on the single attempt made per question.
    pub timeout: Duration,
    pub log_level: String,
    pub log_json: bool,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timeout_secs = lookup("ASK_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            base_url: lookup("ASK_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            log_level: lookup("ASK_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_json: lookup("ASK_LOG_JSON")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn ask_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ASK_PATH)
    }
}
