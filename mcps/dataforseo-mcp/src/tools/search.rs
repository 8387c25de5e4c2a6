//! `search` - query SERP or Labs and hand back stubs

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use super::{raw_str, record_text, str_field, OperationTool, ToolError};
use crate::client::{DataForSeoApi, KeywordIdeasTask, SerpOrganicTask};
use crate::params::SearchParams;
use crate::store::ResultStore;
use crate::types::{ResultStub, SearchResponse, Source};

pub struct SearchTool {
    backend: Arc<dyn DataForSeoApi>,
    store: ResultStore,
}

impl SearchTool {
    pub fn new(backend: Arc<dyn DataForSeoApi>, store: ResultStore) -> Self {
        Self { backend, store }
    }

    async fn search_labs(&self, params: &SearchParams) -> Result<Vec<ResultStub>, ToolError> {
        let task = KeywordIdeasTask {
            keywords: vec![params.query.clone()],
            location_name: params.location_name.clone(),
            language_code: params.language_code.clone(),
            limit: params.limit,
        };
        let items = self.backend.keyword_ideas(&task).await?.into_items()?;

        Ok(items
            .into_iter()
            .map(|item| {
                let title = str_field(&item, "/keyword")
                    .or_else(|| str_field(&item, "/keyword_data/keyword"))
                    .map(str::to_string);
                let volume = item
                    .pointer("/keyword_info/search_volume")
                    .and_then(display_value)
                    .unwrap_or_default();

                ResultStub {
                    id: self.store.insert(item),
                    title,
                    text: format!("search volume: {}", volume),
                    url: None,
                }
            })
            .collect())
    }

    async fn search_serp(&self, params: &SearchParams) -> Result<Vec<ResultStub>, ToolError> {
        let task = SerpOrganicTask {
            keyword: params.query.clone(),
            location_name: params.location_name.clone(),
            language_code: params.language_code.clone(),
            depth: params.depth,
        };
        let items = self
            .backend
            .serp_organic(params.search_engine, &task)
            .await?
            .into_items()?;

        Ok(items
            .into_iter()
            .map(|item| {
                let title = raw_str(&item, "title");
                let text = record_text(&item);
                let url = raw_str(&item, "url");

                ResultStub {
                    id: self.store.insert(item),
                    title,
                    text,
                    url,
                }
            })
            .collect())
    }
}

/// Render a scalar for display; `null` counts as absent
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl OperationTool for SearchTool {
    type Params = SearchParams;
    type Output = SearchResponse;

    fn name(&self) -> &'static str {
        "search"
    }

    fn description(&self) -> &'static str {
        "Search DataForSEO. Use `source=serp` for live search engine results or `source=labs` for keyword ideas from DataForSEO Labs. Returns result stubs whose ids can be passed to `fetch`."
    }

    async fn handle(&self, params: SearchParams) -> Result<SearchResponse, ToolError> {
        tracing::info!(
            query = %params.query,
            source = ?params.source,
            engine = %params.search_engine,
            "Searching"
        );

        let results = match params.source {
            Source::Labs => self.search_labs(&params).await?,
            Source::Serp => self.search_serp(&params).await?,
        };

        tracing::debug!(
            returned = results.len(),
            stored = self.store.len(),
            "Search complete"
        );

        Ok(SearchResponse { results })
    }
}
