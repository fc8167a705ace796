//! Stateless HTTP request builder and response parser for the item API.
//!
//! # Design
//! `CatalogClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; the caller executes the actual round-trip, keeping the
//! core deterministic and free of I/O dependencies.
//!
//! The resource lives at `/items/`: collection requests keep the trailing
//! slash, per-item requests use `/items/{id}`. No validation, retry, or
//! caching happens here.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Method};
use crate::types::{Item, ItemDraft};

/// The fixed origin the catalog backend is expected on.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Synchronous, stateless client for the item-catalog API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/items/`; the collection keeps its trailing slash.
    fn collection_url(&self) -> String {
        format!("{}/items/", self.base_url)
    }

    /// `{base}/items/{id}`
    fn item_url(&self, id: i64) -> String {
        format!("{}/items/{id}", self.base_url)
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest::get(self.collection_url())
    }

    pub fn build_get_item(&self, id: i64) -> HttpRequest {
        HttpRequest::get(self.item_url(id))
    }

    pub fn build_create_item(&self, draft: &ItemDraft) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(draft).map_err(|e| ApiError::Serialize(e.to_string()))?;
        Ok(HttpRequest::json(Method::Post, self.collection_url(), body))
    }

    pub fn build_update_item(&self, id: i64, draft: &ItemDraft) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(draft).map_err(|e| ApiError::Serialize(e.to_string()))?;
        Ok(HttpRequest::json(Method::Put, self.item_url(id), body))
    }

    pub fn build_delete_item(&self, id: i64) -> HttpRequest {
        HttpRequest::delete(self.item_url(id))
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    /// The delete response body is unspecified and ignored; only the status
    /// matters.
    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

/// Any 2xx is success; everything else is an opaque `Status` failure.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
