//! Parameter types for the search and fetch tools
//!
//! Defaults live in serde attributes so omitted fields are filled in during
//! deserialization. Range checks run through [`Validate`] before a handler
//! sees the parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{SearchEngine, Source};

pub const MIN_DEPTH: u32 = 10;
pub const MAX_DEPTH: u32 = 700;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 1000;

/// A parameter failed its constraint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid parameter '{field}': {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

/// Explicit constraint checks run before dispatch
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    #[schemars(description = "Search keyword")]
    pub query: String,

    #[schemars(
        description = "Data source: serp for live search engine results or labs for DataForSEO Labs keyword ideas (default: serp)"
    )]
    #[serde(default)]
    pub source: Source,

    #[schemars(description = "Search engine name, used when source=serp (default: google)")]
    #[serde(default)]
    pub search_engine: SearchEngine,

    #[schemars(description = "Language code, e.g. 'en' (default: en)")]
    #[serde(default = "default_language_code")]
    pub language_code: String,

    #[schemars(description = "Full location name (default: United States)")]
    #[serde(default = "default_location_name")]
    pub location_name: String,

    #[schemars(
        description = "Number of results to fetch from SERP, 10-700, used when source=serp (default: 10)",
        range(min = 10, max = 700)
    )]
    #[serde(default = "default_depth")]
    pub depth: u32,

    #[schemars(
        description = "Number of keyword ideas to return, 1-1000, used when source=labs (default: 10)",
        range(min = 1, max = 1000)
    )]
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_language_code() -> String {
    "en".to_string()
}

fn default_location_name() -> String {
    "United States".to_string()
}

fn default_depth() -> u32 {
    10
}

fn default_limit() -> u32 {
    10
}

impl SearchParams {
    /// Parameters for `query` with every other field at its default
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            source: Source::default(),
            search_engine: SearchEngine::default(),
            language_code: default_language_code(),
            location_name: default_location_name(),
            depth: default_depth(),
            limit: default_limit(),
        }
    }
}

impl Validate for SearchParams {
    fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&self.depth) {
            return Err(ValidationError {
                field: "depth",
                reason: format!(
                    "must be between {} and {}, got {}",
                    MIN_DEPTH, MAX_DEPTH, self.depth
                ),
            });
        }
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&self.limit) {
            return Err(ValidationError {
                field: "limit",
                reason: format!(
                    "must be between {} and {}, got {}",
                    MIN_LIMIT, MAX_LIMIT, self.limit
                ),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FetchParams {
    #[schemars(description = "ID of the resource to fetch.")]
    pub id: String,
}

impl Validate for FetchParams {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
