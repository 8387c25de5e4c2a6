//! DataForSEO API access
//!
//! This module provides a trait-based abstraction over the two endpoints the
//! tools use, plus the task and response envelope shapes they share.
//! [`http::DataForSeoClient`] is the real implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::SearchEngine;

pub mod error;
pub mod http;

pub use error::{BackendError, BackendResult};
pub use http::DataForSeoClient;

/// Status code DataForSEO uses for success
pub const STATUS_OK: i64 = 20000;

/// Codes from here up are failures
const FIRST_ERROR_STATUS: i64 = 40000;

pub const KEYWORD_IDEAS_PATH: &str = "/v3/dataforseo_labs/google/keyword_ideas/live";

/// Organic results endpoint for `engine`
pub fn serp_organic_path(engine: SearchEngine) -> String {
    format!("/v3/serp/{}/organic/live/advanced", engine.as_str())
}

/// Trait for DataForSEO backends
///
/// Implementations return the raw envelope; item extraction and status
/// checks happen in [`ApiResponse::into_items`].
#[async_trait]
pub trait DataForSeoApi: Send + Sync {
    /// Get the name of this backend
    fn name(&self) -> &str;

    /// Labs keyword ideas for Google
    async fn keyword_ideas(&self, task: &KeywordIdeasTask) -> BackendResult<ApiResponse>;

    /// Live organic results for `engine`
    async fn serp_organic(
        &self,
        engine: SearchEngine,
        task: &SerpOrganicTask,
    ) -> BackendResult<ApiResponse>;
}

/// Task body for the keyword ideas endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordIdeasTask {
    pub keywords: Vec<String>,
    pub location_name: String,
    pub language_code: String,
    pub limit: u32,
}

/// Task body for the organic results endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerpOrganicTask {
    pub keyword: String,
    pub location_name: String,
    pub language_code: String,
    pub depth: u32,
}

/// Top-level response envelope; every level may be missing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub tasks: Option<Vec<ApiTask>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiTask {
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub result: Option<Vec<Option<ResultBlock>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultBlock {
    #[serde(default)]
    pub items: Option<Vec<Value>>,
}

fn check_status(code: Option<i64>, message: Option<&str>) -> BackendResult<()> {
    match code {
        Some(code) if code >= FIRST_ERROR_STATUS => Err(BackendError::Api {
            code,
            message: message.unwrap_or("no status message").to_string(),
        }),
        _ => Ok(()),
    }
}

impl ApiResponse {
    /// Items of the first task's first result block
    ///
    /// Absent levels give an empty list. Error status codes on the envelope
    /// or the first task become [`BackendError::Api`].
    pub fn into_items(self) -> BackendResult<Vec<Value>> {
        check_status(self.status_code, self.status_message.as_deref())?;

        let Some(task) = self.tasks.and_then(|tasks| tasks.into_iter().next()) else {
            return Ok(Vec::new());
        };
        check_status(task.status_code, task.status_message.as_deref())?;

        Ok(task
            .result
            .and_then(|blocks| blocks.into_iter().next())
            .flatten()
            .and_then(|block| block.items)
            .unwrap_or_default())
    }
}
