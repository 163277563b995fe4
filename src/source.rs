//! Suggestion sourcing
//!
//! `strategy` decides when a fetch is needed, `client` performs it over HTTP,
//! and `worker` runs fetches off the UI thread.

pub mod client;
pub mod strategy;
pub mod worker;

pub use client::{HttpFetcher, SuggestionFetcher};
pub use strategy::{Lookup, Strategy};
pub use worker::FetchWorker;

use crate::error::FetchError;
use crate::suggestion::Suggestion;

/// What a fetch asks the endpoint for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchQuery {
    /// The whole collection (preload)
    All,
    /// Records for a typed query (live-query)
    Matching(String),
}

/// Request sent from the UI to the fetch worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub request_id: u64,
    pub query: FetchQuery,
}

/// Outcome of a fetch, posted back to the UI
#[derive(Debug)]
pub struct FetchResponse {
    pub request_id: u64,
    pub query: FetchQuery,
    pub result: Result<Vec<Suggestion>, FetchError>,
}
