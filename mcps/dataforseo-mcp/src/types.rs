//! Common types for search and fetch results
//!
//! Stubs are what `search` hands back; `fetch` returns the full record
//! under `metadata`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which DataForSEO product a search goes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Live organic search engine results
    #[default]
    Serp,
    /// DataForSEO Labs keyword ideas
    Labs,
}

/// Search engine used for `source = serp`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
    Yahoo,
}

impl SearchEngine {
    /// Path segment used by the SERP endpoints
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Bing => "bing",
            SearchEngine::Yahoo => "yahoo",
        }
    }
}

impl std::fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lightweight search hit; the full record stays in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultStub {
    /// Opaque id accepted by `fetch`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
    /// Always serialized; `null` for keyword ideas
    pub url: Option<String>,
}

/// Output of the `search` tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Stubs in backend order
    pub results: Vec<ResultStub>,
}

/// Output of the `fetch` tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResult {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
    pub url: Option<String>,
    /// The raw backend record, untouched
    pub metadata: Value,
}
