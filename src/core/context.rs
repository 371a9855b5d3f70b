//! Per-request context
//!
//! Everything the identity provider may need from the incoming request is
//! captured here and passed explicitly down the call chain.

use std::collections::HashMap;
use uuid::Uuid;

/// Request context handed to the gate and forwarded to identity providers
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Request ID
    pub request_id: String,
    /// Request path
    pub path: String,
    /// Raw query string, without the leading `?`
    pub query: Option<String>,
    /// Parsed cookies
    pub cookies: HashMap<String, String>,
    /// Raw `Cookie` header, forwarded verbatim to remote providers
    pub cookie_header: Option<String>,
    /// Raw `Authorization` header
    pub authorization: Option<String>,
    /// Client IP address
    pub client_ip: Option<String>,
    /// User agent
    pub user_agent: Option<String>,
    /// Request timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            path: "/".to_string(),
            query: None,
            cookies: HashMap::new(),
            cookie_header: None,
            authorization: None,
            client_ip: None,
            user_agent: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

impl RequestContext {
    /// Create a context for a request to `path`
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set request ID
    pub fn with_request_id<S: Into<String>>(mut self, request_id: S) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Set query string
    pub fn with_query<S: Into<String>>(mut self, query: S) -> Self {
        let query = query.into();
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    /// Set the raw `Cookie` header and parse it
    pub fn with_cookie_header<S: Into<String>>(mut self, header: S) -> Self {
        let header = header.into();
        self.cookies = parse_cookie_header(&header);
        self.cookie_header = Some(header);
        self
    }

    /// Set the raw `Authorization` header
    pub fn with_authorization<S: Into<String>>(mut self, value: S) -> Self {
        self.authorization = Some(value.into());
        self
    }

    /// Set client information
    pub fn with_client_info(mut self, ip: Option<String>, user_agent: Option<String>) -> Self {
        self.client_ip = ip;
        self.user_agent = user_agent;
        self
    }

    /// Cookie value by name
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Token from an `Authorization: Bearer` header
    pub fn bearer_token(&self) -> Option<&str> {
        self.authorization
            .as_deref()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Path and query of the original request, for return-to redirects
    pub fn original_location(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}

/// Parse a `Cookie` header into name/value pairs. The first occurrence of a
/// name wins, matching how browsers order more specific cookies first.
pub fn parse_cookie_header(header: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();
    for pair in header.split(';') {
        let pair = pair.trim();
        if let Some((name, value)) = pair.split_once('=') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let value = value.trim().trim_matches('"');
            cookies
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }
    }
    cookies
}
