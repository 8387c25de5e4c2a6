//! Search -> store -> fetch behaviour against an in-memory backend
//!
//! The backend returns canned envelopes and records the tasks it was sent,
//! so these tests cover request shaping, stub mapping and fetch lookups
//! without network access.

use dataforseo_mcp::client::{
    ApiResponse, BackendError, BackendResult, KeywordIdeasTask, SerpOrganicTask,
};
use dataforseo_mcp::types::SearchEngine;
use dataforseo_mcp::{
    DataForSeoApi, DataForSeoMcpServer, EmbeddableError, EmbeddableMcp, ResultStore,
};
use mcp_common::{async_trait, CallToolResult, ToolErrorBody};
use rmcp::model::RawContent;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Labs(KeywordIdeasTask),
    Serp(SearchEngine, SerpOrganicTask),
}

/// Backend returning the same items for every call
struct CannedBackend {
    items: Vec<Value>,
    fail: bool,
    calls: Mutex<Vec<Call>>,
}

impl CannedBackend {
    fn with_items(items: Vec<Value>) -> Arc<Self> {
        Arc::new(Self {
            items,
            fail: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            items: Vec::new(),
            fail: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn envelope(&self) -> BackendResult<ApiResponse> {
        if self.fail {
            return Err(BackendError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            });
        }
        Ok(serde_json::from_value(json!({
            "status_code": 20000,
            "tasks": [{ "status_code": 20000, "result": [{ "items": self.items }] }]
        }))?)
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataForSeoApi for CannedBackend {
    fn name(&self) -> &str {
        "canned"
    }

    async fn keyword_ideas(&self, task: &KeywordIdeasTask) -> BackendResult<ApiResponse> {
        self.calls.lock().unwrap().push(Call::Labs(task.clone()));
        self.envelope()
    }

    async fn serp_organic(
        &self,
        engine: SearchEngine,
        task: &SerpOrganicTask,
    ) -> BackendResult<ApiResponse> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Serp(engine, task.clone()));
        self.envelope()
    }
}

fn server_with(backend: Arc<CannedBackend>) -> DataForSeoMcpServer {
    DataForSeoMcpServer::new(backend, ResultStore::new())
}

fn body(result: &CallToolResult) -> Value {
    match &result.content[0].raw {
        RawContent::Text(t) => serde_json::from_str(&t.text).unwrap(),
        _ => panic!("expected text content"),
    }
}

async fn call(server: &DataForSeoMcpServer, tool: &str, params: Value) -> CallToolResult {
    server.call_tool(tool, params).await.unwrap()
}

#[tokio::test]
async fn serp_search_then_fetch_returns_raw_item() {
    let item = json!({ "title": "A", "url": "http://a", "description": "d" });
    let backend = CannedBackend::with_items(vec![item.clone()]);
    let server = server_with(backend.clone());

    let result = call(
        &server,
        "search",
        json!({ "query": "shoes", "source": "serp", "search_engine": "google" }),
    )
    .await;
    assert!(!result.is_error.unwrap_or(false));

    let results = body(&result)["results"].as_array().unwrap().clone();
    assert_eq!(results.len(), 1);
    let id = results[0]["id"].as_str().unwrap().to_string();
    assert_eq!(
        results[0],
        json!({ "id": id, "title": "A", "text": "d", "url": "http://a" })
    );

    let fetched = body(&call(&server, "fetch", json!({ "id": id })).await);
    assert_eq!(
        fetched,
        json!({
            "id": id,
            "title": "A",
            "text": "d",
            "url": "http://a",
            "metadata": item
        })
    );
}

#[tokio::test]
async fn serp_request_uses_defaults() {
    let backend = CannedBackend::with_items(vec![]);
    let server = server_with(backend.clone());

    call(&server, "search", json!({ "query": "shoes" })).await;

    assert_eq!(
        backend.calls(),
        vec![Call::Serp(
            SearchEngine::Google,
            SerpOrganicTask {
                keyword: "shoes".to_string(),
                location_name: "United States".to_string(),
                language_code: "en".to_string(),
                depth: 10,
            }
        )]
    );
}

#[tokio::test]
async fn serp_request_honours_engine_and_depth() {
    let backend = CannedBackend::with_items(vec![]);
    let server = server_with(backend.clone());

    call(
        &server,
        "search",
        json!({
            "query": "shoes",
            "search_engine": "bing",
            "depth": 700,
            "language_code": "fr",
            "location_name": "France"
        }),
    )
    .await;

    match &backend.calls()[0] {
        Call::Serp(engine, task) => {
            assert_eq!(*engine, SearchEngine::Bing);
            assert_eq!(task.depth, 700);
            assert_eq!(task.language_code, "fr");
            assert_eq!(task.location_name, "France");
        }
        other => panic!("expected serp call, got {:?}", other),
    }
}

#[tokio::test]
async fn serp_text_falls_back_to_snippet_then_empty() {
    let backend = CannedBackend::with_items(vec![
        json!({ "title": "B", "url": "http://b", "snippet": "s" }),
        json!({ "title": "C", "url": "http://c" }),
    ]);
    let server = server_with(backend);

    let results = body(&call(&server, "search", json!({ "query": "q" })).await)["results"].clone();

    assert_eq!(results[0]["text"], "s");
    assert_eq!(results[1]["text"], "");
}

#[tokio::test]
async fn serp_empty_title_and_url_pass_through() {
    let item = json!({ "title": "", "url": "", "description": "d" });
    let server = server_with(CannedBackend::with_items(vec![item.clone()]));

    let stub = body(&call(&server, "search", json!({ "query": "q" })).await)["results"][0].clone();
    assert_eq!(stub["title"], "");
    assert_eq!(stub["url"], "");
    assert_eq!(stub["text"], "d");

    let fetched = body(&call(&server, "fetch", json!({ "id": stub["id"] })).await);
    assert_eq!(fetched["title"], "");
    assert_eq!(fetched["url"], "");
    assert_eq!(fetched["metadata"], item);
}

#[tokio::test]
async fn results_preserve_backend_order_with_unique_ids() {
    let items: Vec<Value> = (0..5)
        .map(|n| json!({ "title": format!("t{}", n), "url": format!("http://{}", n) }))
        .collect();
    let server = server_with(CannedBackend::with_items(items));

    let results = body(&call(&server, "search", json!({ "query": "q" })).await)["results"].clone();
    let results = results.as_array().unwrap();

    let titles: Vec<&str> = results.iter().map(|r| r["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["t0", "t1", "t2", "t3", "t4"]);

    let mut ids: Vec<&str> = results.iter().map(|r| r["id"].as_str().unwrap()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
    assert_eq!(server.store().len(), 5);
}

#[tokio::test]
async fn labs_search_maps_keyword_ideas() {
    let backend = CannedBackend::with_items(vec![json!({
        "keyword": "running shoes",
        "keyword_info": { "search_volume": 1000 }
    })]);
    let server = server_with(backend.clone());

    let result = call(
        &server,
        "search",
        json!({ "query": "running shoes", "source": "labs", "limit": 5 }),
    )
    .await;
    let stub = body(&result)["results"][0].clone();

    assert_eq!(stub["title"], "running shoes");
    assert_eq!(stub["text"], "search volume: 1000");
    assert_eq!(stub["url"], Value::Null);
    assert!(stub.as_object().unwrap().contains_key("url"));

    assert_eq!(
        backend.calls(),
        vec![Call::Labs(KeywordIdeasTask {
            keywords: vec!["running shoes".to_string()],
            location_name: "United States".to_string(),
            language_code: "en".to_string(),
            limit: 5,
        })]
    );
}

#[tokio::test]
async fn labs_title_falls_back_to_keyword_data() {
    let backend = CannedBackend::with_items(vec![json!({
        "keyword_data": { "keyword": "trail shoes" }
    })]);
    let server = server_with(backend);

    let stub = body(&call(&server, "search", json!({ "query": "q", "source": "labs" })).await)
        ["results"][0]
        .clone();

    assert_eq!(stub["title"], "trail shoes");
    assert_eq!(stub["text"], "search volume: ");
}

#[tokio::test]
async fn labs_item_fetch_returns_full_record() {
    let item = json!({ "keyword": "boots", "keyword_info": { "search_volume": null } });
    let server = server_with(CannedBackend::with_items(vec![item.clone()]));

    let stub = body(&call(&server, "search", json!({ "query": "q", "source": "labs" })).await)
        ["results"][0]
        .clone();
    assert_eq!(stub["text"], "search volume: ");

    let fetched = body(&call(&server, "fetch", json!({ "id": stub["id"] })).await);
    assert_eq!(fetched["metadata"], item);
    assert_eq!(fetched["text"], "");
    assert_eq!(fetched["url"], Value::Null);
}

#[tokio::test]
async fn fetch_unknown_id_is_error_result() {
    let server = server_with(CannedBackend::with_items(vec![]));

    let result = call(&server, "fetch", json!({ "id": "nonexistent" })).await;

    assert_eq!(result.is_error, Some(true));
    let error: ToolErrorBody = serde_json::from_value(body(&result)).unwrap();
    assert_eq!(error.error, "unknown id");
}

#[tokio::test]
async fn backend_failure_is_error_result() {
    let server = server_with(CannedBackend::failing());

    let result = call(&server, "search", json!({ "query": "q" })).await;

    assert_eq!(result.is_error, Some(true));
    let error: ToolErrorBody = serde_json::from_value(body(&result)).unwrap();
    assert!(error.error.contains("503"));
    assert!(server.store().is_empty());
}

#[tokio::test]
async fn out_of_range_params_never_reach_backend() {
    let backend = CannedBackend::with_items(vec![json!({ "title": "A" })]);
    let server = server_with(backend.clone());

    for params in [
        json!({ "query": "q", "depth": 9 }),
        json!({ "query": "q", "depth": 701 }),
        json!({ "query": "q", "source": "labs", "limit": 0 }),
        json!({ "query": "q", "source": "labs", "limit": 1001 }),
    ] {
        let result = server.call_tool("search", params).await;
        assert!(matches!(result, Err(EmbeddableError::InvalidParams(_))));
    }

    assert!(backend.calls().is_empty());
    assert!(server.store().is_empty());
}

#[tokio::test]
async fn store_is_shared_across_server_clones() {
    let server = server_with(CannedBackend::with_items(vec![json!({ "title": "A" })]));
    let other = server.clone();

    let id = body(&call(&server, "search", json!({ "query": "q" })).await)["results"][0]["id"]
        .clone();
    let fetched = call(&other, "fetch", json!({ "id": id })).await;

    assert!(!fetched.is_error.unwrap_or(false));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_searches_keep_every_record() {
    let server = server_with(CannedBackend::with_items(vec![
        json!({ "title": "A", "url": "http://a" }),
        json!({ "title": "B", "url": "http://b" }),
    ]));

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let server = server.clone();
            tokio::spawn(async move {
                let result = server
                    .call_tool("search", json!({ "query": format!("q{}", n) }))
                    .await
                    .unwrap();
                body(&result)["results"].as_array().unwrap().clone()
            })
        })
        .collect();

    let mut stubs = Vec::new();
    for handle in handles {
        stubs.extend(handle.await.unwrap());
    }
    assert_eq!(stubs.len(), 32);
    assert_eq!(server.store().len(), 32);

    for stub in stubs {
        let fetched = body(&call(&server, "fetch", json!({ "id": stub["id"] })).await);
        assert_eq!(fetched["title"], stub["title"]);
    }
}
