use crate::config::Config;
use domain::ask::{AskRequest, AskTransport};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use shared::types::Result;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AskError {
    #[error("answering service returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("request to answering service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("answering service sent a non-JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP transport for `POST /api/ask`.
#[derive(Clone)]
pub struct AskClient {
    client: Arc<Client>,
    url: String,
}

impl AskClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client: Arc::new(client),
            url: config.ask_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn post(&self, request: &AskRequest) -> std::result::Result<Value, AskError> {
        debug!(url = %self.url, history_len = request.history.len(), "posting question");
        let response = self.client.post(&self.url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AskError::Status { status, body });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl AskTransport for AskClient {
    async fn ask(&self, request: &AskRequest) -> Result<Value> {
        Ok(self.post(request).await?)
    }
}
