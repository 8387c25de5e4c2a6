//! `fetch` - resolve a stub id back to its full record

use async_trait::async_trait;

use super::{raw_str, record_text, OperationTool, ToolError};
use crate::params::FetchParams;
use crate::store::ResultStore;
use crate::types::FetchResult;

pub struct FetchTool {
    store: ResultStore,
}

impl FetchTool {
    pub fn new(store: ResultStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OperationTool for FetchTool {
    type Params = FetchParams;
    type Output = FetchResult;

    fn name(&self) -> &'static str {
        "fetch"
    }

    fn description(&self) -> &'static str {
        "Retrieve detailed SERP information for a result returned by the search tool."
    }

    async fn handle(&self, params: FetchParams) -> Result<FetchResult, ToolError> {
        let record = self.store.get(&params.id).ok_or(ToolError::UnknownId)?;

        Ok(FetchResult {
            title: raw_str(&record, "title"),
            text: record_text(&record),
            url: raw_str(&record, "url"),
            id: params.id,
            metadata: record,
        })
    }
}
