//! HTTP transport described as plain data.
//!
//! # Design
//! The core never touches the network: it builds `HttpRequest` values and
//! consumes `HttpResponse` values, and the host executes the round-trip in
//! between. Everything here is owned data (`String`, `Vec`) so requests and
//! responses can be handed across any host boundary without lifetimes.

/// HTTP method for a request. Only the verbs the catalog resource uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// An HTTP request the host should execute.
///
/// `url` is absolute — the client has already joined the base origin and
/// resource path.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Bodyless GET.
    pub fn get(url: String) -> Self {
        Self::bare(Method::Get, url)
    }

    /// Bodyless DELETE.
    pub fn delete(url: String) -> Self {
        Self::bare(Method::Delete, url)
    }

    /// POST or PUT carrying a JSON body.
    pub fn json(method: Method, url: String, body: String) -> Self {
        Self {
            method,
            url,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }

    fn bare(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }
}

/// The host's answer to an `HttpRequest`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Any 2xx counts as success; the backend's exact codes are not part of
    /// the contract.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
