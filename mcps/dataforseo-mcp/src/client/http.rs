//! HTTP backend
//!
//! Implements [`DataForSeoApi`] against the live DataForSEO REST API.
//! See: https://docs.dataforseo.com/v3/

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use super::{
    serp_organic_path, ApiResponse, BackendError, BackendResult, DataForSeoApi, KeywordIdeasTask,
    SerpOrganicTask, KEYWORD_IDEAS_PATH,
};
use crate::config::DataForSeoConfig;
use crate::types::SearchEngine;

/// Longest slice of an error body kept in [`BackendError::Status`]
const MAX_ERROR_BODY: usize = 500;

/// DataForSEO REST client
pub struct DataForSeoClient {
    client: Client,
    config: DataForSeoConfig,
}

impl DataForSeoClient {
    pub fn new(config: DataForSeoConfig) -> BackendResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("dataforseo-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// POST a single task to `path` and parse the envelope
    async fn post_task<T: Serialize + Sync>(&self, path: &str, task: &T) -> BackendResult<ApiResponse> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(&[task])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let mut body = body;
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl DataForSeoApi for DataForSeoClient {
    fn name(&self) -> &str {
        "dataforseo"
    }

    async fn keyword_ideas(&self, task: &KeywordIdeasTask) -> BackendResult<ApiResponse> {
        self.post_task(KEYWORD_IDEAS_PATH, task).await
    }

    async fn serp_organic(
        &self,
        engine: SearchEngine,
        task: &SerpOrganicTask,
    ) -> BackendResult<ApiResponse> {
        self.post_task(&serp_organic_path(engine), task).await
    }
}
